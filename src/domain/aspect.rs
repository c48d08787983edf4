// ============================================================================
// Aspect Model
// Identifies the facets of a fact and the values a fact holds for them
// ============================================================================

use super::errors::FactResult;
use super::{Period, QName, Unit};
use std::fmt;

/// Aspect key used for the concept in report data.
pub const CONCEPT_KEY: &str = "c";
/// Aspect key used for the period in report data.
pub const PERIOD_KEY: &str = "p";
/// Aspect key used for the unit in report data.
pub const UNIT_KEY: &str = "u";

/// A facet of a fact's identity.
///
/// The derived ordering is the priority order used when choosing label
/// aspects: concept, period, unit, then dimensions by qname.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Aspect {
    Concept,
    Period,
    Unit,
    Dimension(QName),
}

impl Aspect {
    /// Aspect for a report data key (`c`, `p`, `u` or a dimension qname).
    ///
    /// # Errors
    /// Returns `InvalidQName` for any other key that is not a qname.
    pub fn from_key(key: &str) -> FactResult<Self> {
        Ok(match key {
            CONCEPT_KEY => Aspect::Concept,
            PERIOD_KEY => Aspect::Period,
            UNIT_KEY => Aspect::Unit,
            other => Aspect::Dimension(other.parse()?),
        })
    }

    pub fn is_dimension(&self) -> bool {
        matches!(self, Aspect::Dimension(_))
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aspect::Concept => write!(f, "concept"),
            Aspect::Period => write!(f, "period"),
            Aspect::Unit => write!(f, "unit"),
            Aspect::Dimension(dim) => write!(f, "dimension:{}", dim),
        }
    }
}

/// Value of a dimension on a fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DimensionValue {
    /// Explicit dimension: a member drawn from the taxonomy
    Explicit(QName),
    /// Typed dimension: a literal value
    Typed(String),
}

impl fmt::Display for DimensionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionValue::Explicit(member) => write!(f, "{}", member),
            DimensionValue::Typed(value) => write!(f, "{}", value),
        }
    }
}

/// A fact's value for one aspect, borrowed from the fact.
///
/// Equality is structural: qname equality for concepts and members, exact
/// date equality for periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectValue<'a> {
    Concept(&'a QName),
    Period(&'a Period),
    Unit(&'a Unit),
    Dimension(&'a DimensionValue),
}

impl fmt::Display for AspectValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectValue::Concept(concept) => write!(f, "{}", concept),
            AspectValue::Period(period) => write!(f, "{}", period),
            AspectValue::Unit(unit) => write!(f, "{}", unit),
            AspectValue::Dimension(value) => write!(f, "{}", value),
        }
    }
}
