use crate::diagnostics::{DojoError, Result};

/// Narrows a literal to 8 signed bits. Out-of-range literals wrap silently
/// (128 becomes -128); wraparound is defined behavior here, not an error.
pub fn int8(literal: i64) -> i8 {
    literal as i8
}

/// Converts a literal to the word-sized unsigned type. Negative literals
/// cannot be represented and are fatal.
pub fn uint(literal: i64) -> Result<u64> {
    u64::try_from(literal).map_err(|_| DojoError::InvalidLiteral {
        literal,
        target: "uint",
    })
}

/// Truncates a literal to 32-bit float precision.
pub fn float32(literal: f64) -> f32 {
    literal as f32
}
