// ============================================================================
// Numeric Module
// Exact decimal arithmetic for rounding-precision intervals
// ============================================================================
//
// This module provides:
// - Decimals: the rounding indicator of a numeric fact (integer or INF)
// - ValueInterval: closed interval of exact decimals with intersection
// - NumericError: Error types for interval arithmetic
//
// Design principles:
// - No floating-point operations (boundary values must compare exactly)
// - All arithmetic is checked and returns Result (no panics)

mod errors;
mod interval;

pub use errors::{NumericError, NumericResult};
pub use interval::{parse_decimal, Decimals, ValueInterval};
