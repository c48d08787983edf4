// ============================================================================
// Engine Errors
// Precondition violations reported by fact set queries
// ============================================================================

use crate::domain::FactId;
use crate::numeric::NumericError;
use thiserror::Error;

/// Errors from numeric queries over a [`FactSet`](super::FactSet).
///
/// An empty intersection is not an error; it is the `None` result of
/// `value_intersection`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactSetError {
    /// Consistency is undefined for a set with no facts
    #[error("fact set is empty")]
    Empty,

    /// Consistency is only defined over numeric facts
    #[error("fact {id} is not numeric")]
    NonNumericFact { id: FactId },

    /// A fact's rounding interval could not be computed
    #[error("fact {id}: {source}")]
    Numeric {
        id: FactId,
        #[source]
        source: NumericError,
    },
}

/// Result type alias for fact set queries
pub type FactSetResult<T> = Result<T, FactSetError>;
