// ============================================================================
// Domain Errors
// Malformed report data detected while constructing facts
// ============================================================================

use super::FactId;
use crate::numeric::NumericError;
use thiserror::Error;

/// Errors raised when report data violates the fact model's invariants.
///
/// These indicate corrupt input upstream and are surfaced to the caller
/// rather than degraded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactError {
    #[error("invalid qname: {0:?}")]
    InvalidQName(String),

    #[error("invalid period: {0:?}")]
    InvalidPeriod(String),

    #[error("invalid unit: {0:?}")]
    InvalidUnit(String),

    /// Every fact is tagged to exactly one concept
    #[error("fact {id}: missing concept aspect")]
    MissingConcept { id: FactId },

    #[error("fact {id}: numeric value without decimals")]
    ValueWithoutDecimals { id: FactId },

    #[error("fact {id}: decimals without numeric value")]
    DecimalsWithoutValue { id: FactId },

    #[error("fact {id}: {source}")]
    Numeric {
        id: FactId,
        #[source]
        source: NumericError,
    },

    #[error("unknown fact: {0}")]
    UnknownFact(FactId),
}

/// Result type alias for fact construction
pub type FactResult<T> = Result<T, FactError>;
