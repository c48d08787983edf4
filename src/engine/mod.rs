// ============================================================================
// Engine Module
// Contains the fact set queries: label selection and numeric consistency
// ============================================================================

mod consistency;
mod errors;
mod factset;
mod labeller;

pub use errors::{FactSetError, FactSetResult};
pub use factset::FactSet;
pub use labeller::AspectLabeller;
