// ============================================================================
// Fact Source Interface
// Defines the contract for obtaining facts from a loaded report
// ============================================================================

use crate::domain::{Fact, FactId, FactResult};

/// Factory that yields validated [`Fact`]s by key.
///
/// Implemented by whatever holds the loaded report data; the engine only
/// ever reads from it.
pub trait FactSource: Send + Sync {
    /// Build the fact with key `id`.
    ///
    /// # Errors
    /// `UnknownFact` if there is no such fact, or the validation error for
    /// malformed fact data.
    fn fact(&self, id: &FactId) -> FactResult<Fact>;

    /// Keys of every fact in the source.
    fn fact_ids(&self) -> Vec<FactId>;

    /// Build every fact in the source, in key order.
    fn facts(&self) -> FactResult<Vec<Fact>> {
        self.fact_ids().iter().map(|id| self.fact(id)).collect()
    }
}
