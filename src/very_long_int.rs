//! # VeryLongInt
//! Arbitrary-precision non-negative integers stored as digits in radix `2^28`.
//!
//! Operations that have no non-negative integer result (division by zero,
//! a negative difference, a malformed decimal string) produce NaN instead of
//! panicking. NaN is infectious: every operation touching it yields NaN, and
//! every comparison involving it is `false`.
//! # Example
//! ```
//! use very_long_int::VeryLongInt;
//!
//! let a: VeryLongInt = "10000000000000".into();
//! let b: VeryLongInt = "900000000000".into();
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! assert!(!(&b - &a).is_valid());
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display, Write};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
};
use std::str::FromStr;

use log::{debug, trace};

use crate::error::{Result, VeryLongIntError};
use crate::very_long_int_cache::*;
use crate::very_long_int_constants::*;

macro_rules! bit_length_digit {
    ($n: expr) => {
        (Digit::BITS - $n.leading_zeros()) as usize
    };
}

#[derive(Debug, Clone)]
enum Repr {
    /// Least significant digit first, in normal form.
    Num(Vec<Digit>),
    NaN,
}

#[derive(Debug, Clone)]
pub struct VeryLongInt {
    repr: Repr,
}

// Construction of raw values
impl VeryLongInt {
    pub(crate) fn from_digits(digits: Vec<Digit>) -> Self {
        VeryLongInt { repr: Repr::Num(digits) }
    }
    pub(crate) fn invalid() -> Self {
        VeryLongInt { repr: Repr::NaN }
    }
    /// Read-only view of the digits, `None` for NaN.
    pub(crate) fn digits(&self) -> Option<&[Digit]> {
        match &self.repr {
            Repr::Num(digits) => Some(digits),
            Repr::NaN => None,
        }
    }
    fn invalidate(&mut self, cause: &str) {
        debug!("{}, result is NaN", cause);
        self.repr = Repr::NaN;
    }
    /// Applies NaN propagation to a binary operation. Returns both digit
    /// sequences when the operands are valid, otherwise leaves `self` NaN.
    fn operands<'a>(&'a mut self, rhs: &'a VeryLongInt) -> Option<(&'a mut Vec<Digit>, &'a [Digit])> {
        let rhs = match &rhs.repr {
            Repr::Num(digits) => digits.as_slice(),
            Repr::NaN => {
                self.repr = Repr::NaN;
                return None;
            }
        };
        match &mut self.repr {
            Repr::Num(digits) => Some((digits, rhs)),
            Repr::NaN => None,
        }
    }
}

// Public constants and queries
impl VeryLongInt {
    /// The shared zero value.
    pub fn zero() -> &'static VeryLongInt {
        &ZERO
    }
    /// The shared NaN value.
    pub fn nan() -> &'static VeryLongInt {
        &NAN
    }
    pub fn is_valid(&self) -> bool {
        matches!(self.repr, Repr::Num(_))
    }
    /// `false` for zero and for NaN, `true` otherwise.
    pub fn as_bool(&self) -> bool {
        match self.digits() {
            Some(digits) => !VeryLongInt::is_zero_digits(digits),
            None => false,
        }
    }
    /// Number of digits in the binary representation, `0` for NaN.
    ///
    /// Zero is written with a single binary digit.
    pub fn bit_len(&self) -> usize {
        match self.digits() {
            None => 0,
            Some(digits) => {
                let top = digits[digits.len() - 1];
                (digits.len() - 1) * LOGB as usize + bit_length_digit!(top).max(1)
            }
        }
    }
    /// Moves the value out, leaving NaN behind.
    pub fn take(&mut self) -> VeryLongInt {
        std::mem::replace(self, VeryLongInt::invalid())
    }
}

impl Default for VeryLongInt {
    fn default() -> Self {
        ZERO.clone()
    }
}

impl From<&VeryLongInt> for bool {
    fn from(val: &VeryLongInt) -> bool {
        val.as_bool()
    }
}

// Normalizer
impl VeryLongInt {
    /// Absorbs every digit's overflow into the next more significant digit.
    fn align(digits: &mut Vec<Digit>) {
        let mut carry: Digit = 0;
        for digit in digits.iter_mut() {
            *digit += carry;
            carry = *digit >> LOGB;
            *digit &= DIGIT_MASK;
        }
        if carry != 0 {
            digits.push(carry);
        }
    }
    fn trim(digits: &mut Vec<Digit>) {
        while digits.len() > 1 && digits[digits.len() - 1] == 0 {
            digits.pop();
        }
    }
    fn is_zero_digits(digits: &[Digit]) -> bool {
        digits.len() == 1 && digits[0] == 0
    }
    /// Multiplies by `RADIX^n`.
    fn lshift(digits: &mut Vec<Digit>, n: usize) {
        if n == 0 || VeryLongInt::is_zero_digits(digits) {
            return;
        }
        digits.resize(digits.len() + n, 0);
        digits.rotate_right(n);
    }
    /// Divides by `RADIX^n`, discarding the remainder.
    fn rshift(digits: &mut Vec<Digit>, n: usize) {
        let n = n.min(digits.len());
        digits.drain(0..n);
        if digits.is_empty() {
            digits.push(0);
        }
    }
}

// Conversion from native integers
macro_rules! impl_unsigned_to_very_long_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for VeryLongInt {
        fn from(val: $u) -> Self {
            VeryLongInt::value_of(val as u128)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_very_long_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for VeryLongInt {
        fn from(val: $i) -> Self {
            if val < 0 {
                debug!("negative input {}, result is NaN", val);
                VeryLongInt::invalid()
            } else {
                VeryLongInt::value_of(val as u128)
            }
        }
    }
    )*
    };
}
impl_unsigned_to_very_long_int!(u8, u16, u32, u64, u128, usize);
impl_signed_to_very_long_int!(i8, i16, i32, i64, i128, isize);

impl VeryLongInt {
    fn value_of(mut val: u128) -> VeryLongInt {
        if val <= MAX_CONSTANT as u128 {
            return SMALL_CACHE[val as usize].clone();
        }
        let radix = RADIX as u128;
        let mut digits = Vec::with_capacity(128 / LOGB as usize + 1);
        while val != 0 {
            digits.push((val % radix) as Digit);
            val /= radix;
        }
        VeryLongInt::from_digits(digits)
    }
}

// Conversion back to native integers
impl TryFrom<&VeryLongInt> for u128 {
    type Error = VeryLongIntError;

    fn try_from(val: &VeryLongInt) -> Result<u128> {
        let digits = val.digits().ok_or(VeryLongIntError::NaN)?;
        if val.bit_len() > u128::BITS as usize {
            return Err(VeryLongIntError::Overflow { ty: "u128" });
        }
        Ok(digits
            .iter()
            .rev()
            .fold(0u128, |acc, &digit| (acc << LOGB) | digit as u128))
    }
}

macro_rules! impl_very_long_int_to_unsigned {
    ($($u: ty),*) => {
    $(
    impl TryFrom<&VeryLongInt> for $u {
        type Error = VeryLongIntError;

        fn try_from(val: &VeryLongInt) -> Result<$u> {
            let wide = u128::try_from(val)
                .map_err(|e| match e {
                    VeryLongIntError::Overflow { .. } => VeryLongIntError::Overflow { ty: stringify!($u) },
                    e => e,
                })?;
            <$u>::try_from(wide).map_err(|_| VeryLongIntError::Overflow { ty: stringify!($u) })
        }
    }
    )*
    };
}
impl_very_long_int_to_unsigned!(u8, u16, u32, u64, usize);

// Parsing
impl VeryLongInt {
    /// Parses a string made of decimal digits only. No sign, whitespace or
    /// separators are accepted.
    fn parse_decimal(val: &str) -> Result<VeryLongInt> {
        if val.is_empty() {
            return Err(VeryLongIntError::Empty);
        }
        if let Some((position, digit)) = val.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(VeryLongIntError::InvalidDigit { digit, position });
        }

        let mut digits: Vec<Digit> = Vec::with_capacity(val.len() / 8 + 1);
        digits.push(0);
        for c in val.bytes() {
            digits.iter_mut().for_each(|digit| *digit *= 10);
            digits[0] += Digit::from(c - b'0');
            VeryLongInt::align(&mut digits);
        }
        Ok(VeryLongInt::from_digits(digits))
    }
}

impl FromStr for VeryLongInt {
    type Err = VeryLongIntError;

    fn from_str(val: &str) -> Result<Self> {
        VeryLongInt::parse_decimal(val)
    }
}

impl From<&str> for VeryLongInt {
    /// Like [`FromStr`], but a malformed string yields NaN.
    fn from(val: &str) -> Self {
        VeryLongInt::parse_decimal(val).unwrap_or_else(|e| {
            debug!("cannot parse {:?}: {}, result is NaN", val, e);
            VeryLongInt::invalid()
        })
    }
}

impl From<String> for VeryLongInt {
    fn from(val: String) -> Self {
        VeryLongInt::from(val.as_str())
    }
}

// Printing
impl Display for VeryLongInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.digits() {
            Some(digits) => f.pad(&VeryLongInt::to_decimal_string(digits)),
            None => f.pad("NaN"),
        }
    }
}

impl VeryLongInt {
    /// Re-accumulates the digits into base `10^9` chunks, most significant
    /// digit first, then prints the chunks.
    fn to_decimal_string(digits: &[Digit]) -> String {
        let mut chunks: Vec<Digit> = vec![0];
        for &digit in digits.iter().rev() {
            chunks.iter_mut().for_each(|chunk| *chunk <<= LOGB);
            chunks[0] += digit;

            let mut carry: Digit = 0;
            for chunk in chunks.iter_mut() {
                *chunk += carry;
                carry = *chunk / DEC_RADIX;
                *chunk %= DEC_RADIX;
            }
            while carry != 0 {
                chunks.push(carry % DEC_RADIX);
                carry /= DEC_RADIX;
            }
        }

        let mut result = String::with_capacity(chunks.len() * DEC_CHUNK_WIDTH);
        let mut iter = chunks.iter().rev();
        if let Some(top) = iter.next() {
            let _ = write!(result, "{}", top);
        }
        for chunk in iter {
            let _ = write!(result, "{:0width$}", chunk, width = DEC_CHUNK_WIDTH);
        }
        result
    }
}

// Comparison
impl VeryLongInt {
    fn compare_digits(lhs: &[Digit], rhs: &[Digit]) -> Ordering {
        let lhs_len = lhs.len();
        let rhs_len = rhs.len();

        if lhs_len != rhs_len {
            return lhs_len.cmp(&rhs_len);
        }

        for pos in (0..lhs_len).rev() {
            if lhs[pos] != rhs[pos] {
                return lhs[pos].cmp(&rhs[pos]);
            }
        }

        Ordering::Equal
    }
}

// NaN compares unequal and also not-unequal to everything.
#[allow(clippy::partialeq_ne_impl)]
impl PartialEq for VeryLongInt {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
    fn ne(&self, other: &Self) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Less | Ordering::Greater))
    }
}

impl PartialOrd for VeryLongInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.digits(), other.digits()) {
            (Some(lhs), Some(rhs)) => Some(VeryLongInt::compare_digits(lhs, rhs)),
            _ => None,
        }
    }
}

// Addition
impl AddAssign<&VeryLongInt> for VeryLongInt {
    fn add_assign(&mut self, rhs: &VeryLongInt) {
        if let Some((lhs, rhs)) = self.operands(rhs) {
            VeryLongInt::add_digits(lhs, rhs);
        }
    }
}

impl VeryLongInt {
    fn add_digits(lhs: &mut Vec<Digit>, rhs: &[Digit]) {
        if lhs.len() < rhs.len() {
            lhs.resize(rhs.len(), 0);
        }
        lhs.iter_mut().zip(rhs).for_each(|(l, r)| *l += r);
        VeryLongInt::align(lhs);
    }
}

// Subtraction
impl SubAssign<&VeryLongInt> for VeryLongInt {
    fn sub_assign(&mut self, rhs: &VeryLongInt) {
        let negative = match self.operands(rhs) {
            Some((lhs, rhs)) => {
                let negative = VeryLongInt::compare_digits(lhs, rhs).is_lt();
                if !negative {
                    VeryLongInt::sub_digits(lhs, rhs);
                }
                negative
            }
            None => return,
        };
        if negative {
            self.invalidate("difference is negative");
        }
    }
}

impl VeryLongInt {
    /// Requires `big >= little`.
    fn sub_digits(big: &mut Vec<Digit>, little: &[Digit]) {
        big.iter_mut().zip(little).for_each(|(b, l)| *b -= l);

        for i in 0..big.len() - 1 {
            if big[i] < 0 {
                big[i] += RADIX;
                big[i + 1] -= 1;
            }
        }
        VeryLongInt::trim(big);
    }
}

// Multiplication
impl MulAssign<&VeryLongInt> for VeryLongInt {
    fn mul_assign(&mut self, rhs: &VeryLongInt) {
        if let Some((lhs, rhs)) = self.operands(rhs) {
            *lhs = VeryLongInt::mul_digits(lhs, rhs);
        }
    }
}

impl VeryLongInt {
    /// Schoolbook multiplication. Aligning after every row keeps each
    /// product digit below `RADIX^2 + RADIX`.
    fn mul_digits(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
        let mut product = vec![0; x.len() + y.len() - 1];
        for (i, &x_digit) in x.iter().enumerate() {
            for (j, &y_digit) in y.iter().enumerate() {
                product[i + j] += x_digit * y_digit;
            }
            VeryLongInt::align(&mut product);
        }
        VeryLongInt::trim(&mut product);
        product
    }
}

// Division
impl DivAssign<&VeryLongInt> for VeryLongInt {
    fn div_assign(&mut self, rhs: &VeryLongInt) {
        let quotient = match self.operands(rhs) {
            Some((_, rhs)) if VeryLongInt::is_zero_digits(rhs) => None,
            Some((lhs, rhs)) => Some(VeryLongInt::div_digits(lhs, rhs)),
            None => return,
        };
        match quotient {
            Some(quotient) => self.repr = Repr::Num(quotient),
            None => self.invalidate("division by zero"),
        }
    }
}

impl VeryLongInt {
    /// Long division finding every quotient digit by binary search over
    /// `[0, RADIX)`. `divisor` must not be zero.
    fn div_digits(dividend: &[Digit], divisor: &[Digit]) -> Vec<Digit> {
        let n = if dividend.len() > divisor.len() {
            dividend.len() - divisor.len() + 1
        } else {
            1
        };
        let mut quotient: Vec<Digit> = vec![0; n];
        // quotient digits found so far, times the divisor
        let mut committed: Vec<Digit> = vec![0];

        for i in (0..n).rev() {
            let (mut low, mut high) = (0, RADIX - 1);
            while low < high {
                let mid = (low + high + 1) >> 1;
                let mut trial = VeryLongInt::shifted_multiple(divisor, mid, i);
                VeryLongInt::add_digits(&mut trial, &committed);
                if VeryLongInt::compare_digits(dividend, &trial).is_lt() {
                    high = mid - 1;
                } else {
                    low = mid;
                }
            }
            if low != 0 {
                let step = VeryLongInt::shifted_multiple(divisor, low, i);
                VeryLongInt::add_digits(&mut committed, &step);
            }
            trace!("quotient digit {} = {}", i, low);
            quotient[i] = low;
        }
        VeryLongInt::trim(&mut quotient);
        quotient
    }

    /// `digits * m * RADIX^shift`
    fn shifted_multiple(digits: &[Digit], m: Digit, shift: usize) -> Vec<Digit> {
        let mut multiple = VeryLongInt::mul_digits(digits, &[m]);
        VeryLongInt::lshift(&mut multiple, shift);
        multiple
    }
}

// Remainder
impl RemAssign<&VeryLongInt> for VeryLongInt {
    fn rem_assign(&mut self, rhs: &VeryLongInt) {
        let mut multiple = self.clone();
        multiple /= rhs;
        multiple *= rhs;
        *self -= &multiple;
    }
}

macro_rules! impl_binary_op {
    ($($op: ident, $method: ident, $op_assign: ident, $method_assign: ident);* $(;)?) => {
    $(
    impl $op_assign for VeryLongInt {
        fn $method_assign(&mut self, rhs: VeryLongInt) {
            $op_assign::$method_assign(self, &rhs);
        }
    }

    impl $op for VeryLongInt {
        type Output = VeryLongInt;

        fn $method(mut self, rhs: VeryLongInt) -> Self::Output {
            $op_assign::$method_assign(&mut self, &rhs);
            self
        }
    }

    impl $op<&VeryLongInt> for VeryLongInt {
        type Output = VeryLongInt;

        fn $method(mut self, rhs: &VeryLongInt) -> Self::Output {
            $op_assign::$method_assign(&mut self, rhs);
            self
        }
    }

    impl $op<VeryLongInt> for &VeryLongInt {
        type Output = VeryLongInt;

        fn $method(self, rhs: VeryLongInt) -> Self::Output {
            $op::$method(self.clone(), &rhs)
        }
    }

    impl $op<&VeryLongInt> for &VeryLongInt {
        type Output = VeryLongInt;

        fn $method(self, rhs: &VeryLongInt) -> Self::Output {
            $op::$method(self.clone(), rhs)
        }
    }
    )*
    };
}

impl_binary_op!(
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
    Rem, rem, RemAssign, rem_assign;
);

// Left shift
impl ShlAssign<u32> for VeryLongInt {
    fn shl_assign(&mut self, n: u32) {
        let Repr::Num(digits) = &mut self.repr else {
            return;
        };
        VeryLongInt::lshift(digits, (n / LOGB) as usize);
        let n_bits = n % LOGB;
        if n_bits == 0 {
            return;
        }
        digits.iter_mut().for_each(|digit| *digit <<= n_bits);
        VeryLongInt::align(digits);
    }
}

// Right shift
impl ShrAssign<u32> for VeryLongInt {
    fn shr_assign(&mut self, n: u32) {
        let Repr::Num(digits) = &mut self.repr else {
            return;
        };
        VeryLongInt::rshift(digits, (n / LOGB) as usize);
        let n_bits = n % LOGB;
        if n_bits == 0 {
            return;
        }

        let low_mask: Digit = (1 << n_bits) - 1;
        let mut carry: Digit = 0;
        for digit in digits.iter_mut().rev() {
            carry = (carry << LOGB) + *digit;
            *digit = carry >> n_bits;
            carry &= low_mask;
        }
        if digits.len() > 1 && digits[digits.len() - 1] == 0 {
            digits.pop();
        }
    }
}

macro_rules! impl_shift_op {
    ($($op: ident, $method: ident, $op_assign: ident, $method_assign: ident);* $(;)?) => {
    $(
    impl $op<u32> for VeryLongInt {
        type Output = VeryLongInt;

        fn $method(mut self, n: u32) -> Self::Output {
            $op_assign::$method_assign(&mut self, n);
            self
        }
    }

    impl $op<u32> for &VeryLongInt {
        type Output = VeryLongInt;

        fn $method(self, n: u32) -> Self::Output {
            $op::$method(self.clone(), n)
        }
    }
    )*
    };
}

impl_shift_op!(
    Shl, shl, ShlAssign, shl_assign;
    Shr, shr, ShrAssign, shr_assign;
);

#[test]
fn test_from() {
    assert_eq!(VeryLongInt::from(0u8).digits(), Some(&[0][..]));
    assert_eq!(VeryLongInt::from(16u32).digits(), Some(&[16][..]));
    assert_eq!(VeryLongInt::from(RADIX as u64).digits(), Some(&[0, 1][..]));
    assert_eq!(VeryLongInt::from(RADIX as u64 - 1).digits(), Some(&[RADIX - 1][..]));
    assert_eq!(VeryLongInt::from(7i16), VeryLongInt::from(7u64));
    assert_eq!(VeryLongInt::from(u128::MAX).to_string(), u128::MAX.to_string());
    assert!(!VeryLongInt::from(-1i32).is_valid());
    assert!(!VeryLongInt::from(i64::MIN).is_valid());
    assert_eq!(VeryLongInt::default(), *VeryLongInt::zero());
}

#[test]
fn test_parse() {
    let zero = VeryLongInt::from("0");
    assert_eq!(zero, *VeryLongInt::zero());
    assert_eq!(zero.to_string(), "0");
    assert_eq!(VeryLongInt::from("0000"), *VeryLongInt::zero());
    assert_eq!(VeryLongInt::from("007"), VeryLongInt::from(7u8));
    assert_eq!(VeryLongInt::from("268435456").digits(), Some(&[0, 1][..]));

    for bad in ["", "12a3", "+1", "-1", " 1", "1 ", "1_000", "1,000", "١٢"] {
        let val = VeryLongInt::from(bad);
        assert!(!val.is_valid(), "{:?} should be NaN", bad);
        assert_eq!(val.to_string(), "NaN");
    }

    assert_eq!("".parse::<VeryLongInt>(), Err(VeryLongIntError::Empty));
    assert_eq!(
        "12a3".parse::<VeryLongInt>(),
        Err(VeryLongIntError::InvalidDigit { digit: 'a', position: 2 })
    );
    assert_eq!("123".parse::<VeryLongInt>(), Ok(VeryLongInt::from(123u8)));
}

#[test]
fn test_to_string() {
    assert_eq!(VeryLongInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(VeryLongInt::from(1_000_000_000u64).to_string(), "1000000000");
    assert_eq!(VeryLongInt::from(1_000_000_000_000_000_005u64).to_string(), "1000000000000000005");
    assert_eq!(VeryLongInt::nan().to_string(), "NaN");
    assert_eq!(format!("{:>5}", VeryLongInt::from(42u8)), "   42");
    assert_eq!(format!("{:<5}|", VeryLongInt::nan()), "NaN  |");

    let s = "12345678909876523784950683472613487560983287654321000000000000000000000000000001";
    assert_eq!(VeryLongInt::from(s).to_string(), s);
}

#[test]
fn test_align_and_digit_shifts() {
    let mut digits = vec![RADIX + 1, RADIX - 1];
    VeryLongInt::align(&mut digits);
    assert_eq!(digits, vec![1, 0, 1]);

    let mut digits = vec![0];
    VeryLongInt::lshift(&mut digits, 3);
    assert_eq!(digits, vec![0]);

    let mut digits = vec![5, 6];
    VeryLongInt::lshift(&mut digits, 2);
    assert_eq!(digits, vec![0, 0, 5, 6]);
    VeryLongInt::rshift(&mut digits, 3);
    assert_eq!(digits, vec![6]);
    VeryLongInt::rshift(&mut digits, 10);
    assert_eq!(digits, vec![0]);
}

#[test]
fn test_add() {
    let a = VeryLongInt::from(RADIX as u64 - 1);
    assert_eq!((&a + VeryLongInt::from(1u8)).digits(), Some(&[0, 1][..]));
    assert_eq!(&a + VeryLongInt::zero(), a);

    let mut b = VeryLongInt::from(u64::MAX);
    b += VeryLongInt::from(1u8);
    assert_eq!(b.to_string(), "18446744073709551616");

    assert!(!(VeryLongInt::nan() + &a).is_valid());
    assert!(!(&a + VeryLongInt::nan()).is_valid());
}

#[test]
fn test_sub() {
    let a = VeryLongInt::from(1u64 << 56);
    let b = &a - VeryLongInt::from(1u8);
    assert_eq!(b.digits(), Some(&[RADIX - 1, RADIX - 1][..]));
    assert_eq!(&a - &a, *VeryLongInt::zero());
    assert_eq!((&a - &a).digits(), Some(&[0][..]));

    let c = VeryLongInt::from(3u8) - VeryLongInt::from(5u8);
    assert!(!c.is_valid());
    assert!(!(c + VeryLongInt::from(10u8)).is_valid());
}

#[test]
fn test_mul() {
    let a = VeryLongInt::from(123456789u64);
    let b = VeryLongInt::from(987654321u64);
    assert_eq!((&a * &b).to_string(), "121932631112635269");
    assert_eq!(&a * VeryLongInt::from(1u8), a);

    let big = VeryLongInt::from("123871287894782164876238905710532895792830741278950327951074309571");
    let product = VeryLongInt::zero() * &big;
    assert_eq!(product.digits(), Some(&[0][..]));
    assert_eq!(&big * VeryLongInt::zero(), *VeryLongInt::zero());
    assert!(!(&big * VeryLongInt::nan()).is_valid());
}

#[test]
fn test_div() {
    let a = VeryLongInt::from("120");
    let b = VeryLongInt::from("13");
    let c = VeryLongInt::from("9");
    assert_eq!(a / b, c);

    let a = VeryLongInt::from("4294967296");
    assert_eq!(a / VeryLongInt::from(65536u32), VeryLongInt::from(65536u32));

    let a = VeryLongInt::from("10000000000000000000000000000000000");
    let b = VeryLongInt::from("1000");
    let c = VeryLongInt::from("10000000000000000000000000000000");
    assert_eq!(a / b, c);

    let a = VeryLongInt::from("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = VeryLongInt::from("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = VeryLongInt::from("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(&a / &b, c);
    assert_eq!(&b / &a, *VeryLongInt::zero());

    let mut d = VeryLongInt::from(1u8);
    d /= VeryLongInt::zero();
    assert!(!d.is_valid());
    d /= VeryLongInt::from(1u8);
    assert!(!d.is_valid());
}

#[test]
fn test_mod() {
    let a: VeryLongInt = "12".into();
    let b: VeryLongInt = "8".into();
    let r: VeryLongInt = "4".into();
    assert_eq!(a % b, r);

    let a: VeryLongInt = "10000000000000000".into();
    let b: VeryLongInt = "10".into();
    assert_eq!(a % b, *VeryLongInt::zero());

    let a: VeryLongInt = "23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245".into();
    let b: VeryLongInt = "526738495607659438721653478560954837265378495607".into();
    let r: VeryLongInt = "393707270751296419349581795408095683999332705291".into();
    assert_eq!(&a % &b, r);

    assert!(!(&a % VeryLongInt::zero()).is_valid());
    assert!(!(VeryLongInt::nan() % &b).is_valid());
}

#[test]
fn test_shift() {
    let one = VeryLongInt::from(1u8);
    let big = &one << 100;
    assert_eq!(big.to_string(), "1267650600228229401496703205376");
    assert_eq!(&big >> 100, one);
    assert_eq!(&big >> 99, VeryLongInt::from(2u8));
    assert_eq!(&big >> 200, *VeryLongInt::zero());
    assert_eq!((&big >> 101).digits(), Some(&[0][..]));
    assert_eq!(VeryLongInt::zero() << 77, *VeryLongInt::zero());
    assert_eq!(VeryLongInt::from(0xffu8) << 28, VeryLongInt::from(0xff_u64 << 28));
    assert_eq!(VeryLongInt::from(0xffu8) << 27, VeryLongInt::from(0xff_u64 << 27));
    assert_eq!(VeryLongInt::from(u64::MAX) >> 33, VeryLongInt::from(u64::MAX >> 33));

    let mut nan = VeryLongInt::nan().clone();
    nan <<= 3;
    assert!(!nan.is_valid());
    nan >>= 3;
    assert!(!nan.is_valid());
}

#[test]
fn test_compare() {
    let a = VeryLongInt::from(5u8);
    let b = VeryLongInt::from(RADIX as u64);
    let nan = VeryLongInt::nan();

    assert!(a < b && b > a && a <= b && a != b);
    assert!(a <= a.clone() && a >= a.clone() && a == a.clone());
    let parsed_nan = VeryLongInt::from("x");
    assert!(!(*nan == parsed_nan));
    assert!(!(*nan != parsed_nan));
    assert!(!(a == *nan) && !(a != *nan));
    assert!(!(a < *nan) && !(a > *nan) && !(a <= *nan) && !(a >= *nan));
    assert_eq!(a.partial_cmp(nan), None);
}

#[test]
fn test_bit_len() {
    assert_eq!(VeryLongInt::nan().bit_len(), 0);
    assert_eq!(VeryLongInt::zero().bit_len(), 1);
    assert_eq!(VeryLongInt::from(1u8).bit_len(), 1);
    assert_eq!(VeryLongInt::from(255u8).bit_len(), 8);
    assert_eq!(VeryLongInt::from(RADIX as u64).bit_len(), 29);
    assert_eq!((VeryLongInt::from(1u8) << 100).bit_len(), 101);
}

#[test]
fn test_as_bool_and_take() {
    assert!(!VeryLongInt::zero().as_bool());
    assert!(!VeryLongInt::nan().as_bool());
    assert!(bool::from(&VeryLongInt::from(3u8)));

    let mut a = VeryLongInt::from(99u8);
    let b = a.take();
    assert!(!a.is_valid());
    assert_eq!(b, VeryLongInt::from(99u8));
}

#[test]
fn test_try_from() {
    let a = VeryLongInt::from(u64::MAX);
    assert_eq!(u64::try_from(&a), Ok(u64::MAX));
    assert_eq!(u128::try_from(&a), Ok(u64::MAX as u128));
    assert_eq!(u32::try_from(&a), Err(VeryLongIntError::Overflow { ty: "u32" }));
    assert_eq!(
        u64::try_from(&(a + VeryLongInt::from(1u8))),
        Err(VeryLongIntError::Overflow { ty: "u64" })
    );
    assert_eq!(u8::try_from(VeryLongInt::nan()), Err(VeryLongIntError::NaN));
    assert_eq!(u128::try_from(&VeryLongInt::from(u128::MAX)), Ok(u128::MAX));
}
