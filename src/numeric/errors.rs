// ============================================================================
// Numeric Errors
// Error types for exact decimal interval arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur while building or combining rounding intervals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Result exceeded the representable decimal range
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,

    /// The rounding indicator asks for more fractional digits than a
    /// decimal can carry
    #[error("precision out of range: decimals={decimals} exceeds {max} fractional digits")]
    PrecisionOutOfRange { decimals: i32, max: u32 },

    /// Input string is not a decimal number
    #[error("invalid decimal: {0:?}")]
    InvalidDecimal(String),

    /// Input string is not a rounding indicator (integer or INF)
    #[error("invalid decimals attribute: {0:?}")]
    InvalidDecimals(String),
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
