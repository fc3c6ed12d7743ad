use lazy_static::*;

use crate::VeryLongInt;
use crate::very_long_int_constants::*;

lazy_static! {
    /// The additive identity, a single `0` digit.
    pub static ref ZERO: VeryLongInt = VeryLongInt::from_digits(vec![0]);
    /// The canonical invalid value.
    pub static ref NAN: VeryLongInt = VeryLongInt::invalid();
    pub static ref SMALL_CACHE: [VeryLongInt; MAX_CONSTANT + 1] = [
        VeryLongInt::from_digits(vec![0] ),
        VeryLongInt::from_digits(vec![1] ),
        VeryLongInt::from_digits(vec![2] ),
        VeryLongInt::from_digits(vec![3] ),
        VeryLongInt::from_digits(vec![4] ),
        VeryLongInt::from_digits(vec![5] ),
        VeryLongInt::from_digits(vec![6] ),
        VeryLongInt::from_digits(vec![7] ),
        VeryLongInt::from_digits(vec![8] ),
        VeryLongInt::from_digits(vec![9] ),
        VeryLongInt::from_digits(vec![10]),
        VeryLongInt::from_digits(vec![11]),
        VeryLongInt::from_digits(vec![12]),
        VeryLongInt::from_digits(vec![13]),
        VeryLongInt::from_digits(vec![14]),
        VeryLongInt::from_digits(vec![15]),
        VeryLongInt::from_digits(vec![16]),
    ];
}
