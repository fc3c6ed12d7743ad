//! Very Long Int \
//! This crate provides:
//! - [`VeryLongInt`]: arbitrary-precision non-negative integers. Faulty operations
//!   (division by zero, negative differences, malformed input) yield NaN, which
//!   propagates through all further arithmetic.
//! - [`VeryLongIntError`]: the error type of the checked conversions `FromStr` and `TryFrom`.

mod error;
mod very_long_int;
mod very_long_int_cache;
mod very_long_int_constants;

#[cfg(test)]
mod proptests;

pub use error::{Result, VeryLongIntError};
pub use very_long_int::VeryLongInt;
pub use very_long_int_cache::{NAN, ZERO};

#[cfg(test)]
mod tests {
    use crate::VeryLongInt;

    #[test]
    fn it_works() {
        let a: VeryLongInt = "10000000000000".into();
        let b: VeryLongInt = "900000000000".into();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        println!("a << 10 = {}", &a << 10);
        println!("a >> 10 = {}", &a >> 10);
        println!("b - a = {}", &b - &a);
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
    }
}
