// ============================================================================
// Numeric Consistency
// Checks whether differently-rounded values can all be the same number
// ============================================================================

use super::errors::{FactSetError, FactSetResult};
use super::factset::FactSet;
use crate::numeric::ValueInterval;

impl FactSet<'_> {
    /// Rounding interval of every member, in order.
    ///
    /// # Errors
    /// - `Empty` if the set has no facts
    /// - `NonNumericFact` for the first member without a numeric value
    /// - `Numeric` if a member's interval is not representable
    pub fn value_intervals(&self) -> FactSetResult<Vec<ValueInterval>> {
        if self.is_empty() {
            return Err(FactSetError::Empty);
        }

        self.iter()
            .map(|fact| {
                let numeric = fact.numeric().ok_or_else(|| FactSetError::NonNumericFact {
                    id: fact.id().clone(),
                })?;
                numeric.interval().map_err(|source| FactSetError::Numeric {
                    id: fact.id().clone(),
                    source,
                })
            })
            .collect()
    }

    /// Range of values compatible with every member's reported value and
    /// rounding, or `None` if no single value is.
    ///
    /// A zero-width range (`a == b`) is a valid intersection.
    ///
    /// # Errors
    /// See [`value_intervals`](Self::value_intervals).
    pub fn value_intersection(&self) -> FactSetResult<Option<ValueInterval>> {
        let intervals = self.value_intervals()?;
        let intersection = ValueInterval::intersect_all(intervals.iter().copied());

        match &intersection {
            Some(range) => tracing::trace!("Fact set values intersect at {}", range),
            None => tracing::debug!(
                "Inconsistent fact set: no common value across intervals {:?}",
                intervals.iter().map(|i| i.to_string()).collect::<Vec<_>>()
            ),
        }
        Ok(intersection)
    }

    /// Whether some single value is compatible with every member.
    ///
    /// # Errors
    /// See [`value_intervals`](Self::value_intervals).
    pub fn is_consistent(&self) -> FactSetResult<bool> {
        Ok(self.value_intersection()?.is_some())
    }
}
