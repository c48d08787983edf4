// ============================================================================
// Utilities Module
// Helpers for applications embedding the engine
// ============================================================================

mod logging;

pub use logging::{init_logging, DEFAULT_FILTER};
