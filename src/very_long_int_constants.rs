/// Storage type of a single digit. Wide enough to hold `digit * digit + carry`.
pub type Digit = i64;

/// Binary logarithm of the radix.
pub const LOGB: u32 = 28;

/// Radix of the internal representation, `2^28`.
pub const RADIX: Digit = 1 << LOGB;

pub const DIGIT_MASK: Digit = RADIX - 1;

/// Radix used while rendering to decimal, `10^9`.
pub const DEC_RADIX: Digit = 1_000_000_000;

/// Number of decimal characters in one `DEC_RADIX` chunk.
pub const DEC_CHUNK_WIDTH: usize = 9;

pub const MAX_CONSTANT: usize = 16;

// RADIX * RADIX plus a carry has to fit the digit type.
const _: () = assert!((LOGB * 2 + 1) < Digit::BITS);
