// ============================================================================
// Domain Models Module
// Contains the fact model and its aspect value objects
// ============================================================================

pub mod aspect;
pub mod config;
pub mod errors;
pub mod fact;
pub mod period;
pub mod qname;
pub mod unit;

pub use aspect::{Aspect, AspectValue, DimensionValue};
pub use config::{ConfigError, ConfigResult, LabelConfig};
pub use errors::{FactError, FactResult};
pub use fact::{Fact, FactBuilder, FactId, NumericValue};
pub use period::Period;
pub use qname::QName;
pub use unit::Unit;
