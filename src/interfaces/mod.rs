// ============================================================================
// Interfaces Module
// Contains the collaborator traits consumed by the engine
// ============================================================================

mod fact_source;
mod labels;

pub use fact_source::FactSource;
pub use labels::{LabelDictionary, LabelResolver, LabelRole, NoLabels};
