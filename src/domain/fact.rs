// ============================================================================
// Fact Domain Model
// ============================================================================

use super::errors::{FactError, FactResult};
use super::{Aspect, AspectValue, DimensionValue, Period, QName, Unit};
use crate::numeric::{Decimals, NumericResult, ValueInterval};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Stable key of a fact within its report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FactId(String);

impl FactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FactId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FactId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Reported value of a numeric fact together with its rounding indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericValue {
    value: Decimal,
    decimals: Decimals,
}

impl NumericValue {
    pub fn new(value: Decimal, decimals: Decimals) -> Self {
        Self { value, decimals }
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Range of true values consistent with the reported rounding.
    pub fn interval(&self) -> NumericResult<ValueInterval> {
        ValueInterval::from_rounding(self.value, self.decimals)
    }
}

// ============================================================================
// Fact Entity
// ============================================================================

/// A single tagged data point from a report.
///
/// Immutable once built; use [`FactBuilder`] to construct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    id: FactId,
    concept: QName,
    period: Option<Period>,
    unit: Option<Unit>,
    dimensions: BTreeMap<QName, DimensionValue>,
    numeric: Option<NumericValue>,
}

impl Fact {
    pub fn builder(id: impl Into<FactId>) -> FactBuilder {
        FactBuilder::new(id)
    }

    pub fn id(&self) -> &FactId {
        &self.id
    }

    pub fn concept(&self) -> &QName {
        &self.concept
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    pub fn dimension(&self, dimension: &QName) -> Option<&DimensionValue> {
        self.dimensions.get(dimension)
    }

    /// Dimensions present on this fact, ordered by qname.
    pub fn dimensions(&self) -> impl Iterator<Item = (&QName, &DimensionValue)> {
        self.dimensions.iter()
    }

    pub fn numeric(&self) -> Option<&NumericValue> {
        self.numeric.as_ref()
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric.is_some()
    }

    pub fn value(&self) -> Option<Decimal> {
        self.numeric.map(|n| n.value())
    }

    pub fn decimals(&self) -> Option<Decimals> {
        self.numeric.map(|n| n.decimals())
    }

    /// Resolve this fact's value for `aspect`, or `None` if the fact has no
    /// value for it.
    pub fn aspect_value(&self, aspect: &Aspect) -> Option<AspectValue<'_>> {
        match aspect {
            Aspect::Concept => Some(AspectValue::Concept(&self.concept)),
            Aspect::Period => self.period.as_ref().map(AspectValue::Period),
            Aspect::Unit => self.unit.as_ref().map(AspectValue::Unit),
            Aspect::Dimension(dim) => self.dimensions.get(dim).map(AspectValue::Dimension),
        }
    }

    /// All aspects this fact has a value for, in priority order.
    pub fn aspects(&self) -> Vec<Aspect> {
        let mut aspects = vec![Aspect::Concept];
        if self.period.is_some() {
            aspects.push(Aspect::Period);
        }
        if self.unit.is_some() {
            aspects.push(Aspect::Unit);
        }
        aspects.extend(self.dimensions.keys().cloned().map(Aspect::Dimension));
        aspects
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder that validates the fact invariants on [`FactBuilder::build`]:
/// a concept is always present, and `value` and `decimals` come together.
#[derive(Debug, Clone)]
pub struct FactBuilder {
    id: FactId,
    concept: Option<QName>,
    period: Option<Period>,
    unit: Option<Unit>,
    dimensions: BTreeMap<QName, DimensionValue>,
    value: Option<Decimal>,
    decimals: Option<Decimals>,
}

impl FactBuilder {
    pub fn new(id: impl Into<FactId>) -> Self {
        Self {
            id: id.into(),
            concept: None,
            period: None,
            unit: None,
            dimensions: BTreeMap::new(),
            value: None,
            decimals: None,
        }
    }

    pub fn concept(mut self, concept: QName) -> Self {
        self.concept = Some(concept);
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn dimension(mut self, dimension: QName, value: DimensionValue) -> Self {
        self.dimensions.insert(dimension, value);
        self
    }

    pub fn value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    pub fn decimals(mut self, decimals: Decimals) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Set an aspect from its raw report form.
    ///
    /// `key` is `c`, `p`, `u` or a dimension qname; dimension values are
    /// read as explicit members.
    ///
    /// # Errors
    /// Returns the parse error for a malformed key or value.
    pub fn aspect(self, key: &str, raw: &str) -> FactResult<Self> {
        Ok(match Aspect::from_key(key)? {
            Aspect::Concept => self.concept(raw.parse()?),
            Aspect::Period => self.period(raw.parse()?),
            Aspect::Unit => self.unit(raw.parse()?),
            Aspect::Dimension(dimension) => {
                self.dimension(dimension, DimensionValue::Explicit(raw.parse()?))
            },
        })
    }

    /// # Errors
    /// - `MissingConcept` if no concept was set
    /// - `ValueWithoutDecimals` / `DecimalsWithoutValue` for a half-specified
    ///   numeric payload
    pub fn build(self) -> FactResult<Fact> {
        let concept = self
            .concept
            .ok_or_else(|| FactError::MissingConcept { id: self.id.clone() })?;

        let numeric = match (self.value, self.decimals) {
            (Some(value), Some(decimals)) => Some(NumericValue::new(value, decimals)),
            (None, None) => None,
            (Some(_), None) => return Err(FactError::ValueWithoutDecimals { id: self.id }),
            (None, Some(_)) => return Err(FactError::DecimalsWithoutValue { id: self.id }),
        };

        Ok(Fact {
            id: self.id,
            concept,
            period: self.period,
            unit: self.unit,
            dimensions: self.dimensions,
            numeric,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
