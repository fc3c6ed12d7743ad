use thiserror::Error;

/// Errors reported by the checked conversions into and out of [`VeryLongInt`](crate::VeryLongInt).
///
/// Arithmetic never reports errors this way; it produces NaN instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VeryLongIntError {
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    #[error("value is NaN")]
    NaN,

    #[error("value does not fit into {ty}")]
    Overflow { ty: &'static str },
}

pub type Result<T> = core::result::Result<T, VeryLongIntError>;
