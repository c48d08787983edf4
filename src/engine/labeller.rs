// ============================================================================
// Aspect Labeller
// Renders aspect values into human-readable text
// ============================================================================

use crate::domain::{Aspect, AspectValue, ConfigResult, DimensionValue, Fact, LabelConfig, QName};
use crate::interfaces::LabelResolver;

/// Renders aspect values using a label dictionary and a [`LabelConfig`].
///
/// Concepts and explicit members are looked up in the dictionary and fall
/// back to their qname. Periods, units and typed members are rendered from
/// their own value.
pub struct AspectLabeller<'r> {
    resolver: &'r dyn LabelResolver,
    config: LabelConfig,
}

impl<'r> AspectLabeller<'r> {
    /// # Errors
    /// Returns the validation error of an invalid `config`.
    pub fn new(resolver: &'r dyn LabelResolver, config: LabelConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { resolver, config })
    }

    /// Labeller using the default configuration (standard English labels).
    pub fn with_defaults(resolver: &'r dyn LabelResolver) -> Self {
        Self {
            resolver,
            config: LabelConfig::default(),
        }
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    /// Dictionary label of `qname`, or its `prefix:local` form on a miss.
    pub fn qname_label(&self, qname: &QName) -> String {
        self.resolver
            .resolve_label(qname, &self.config.role, &self.config.language)
            .unwrap_or_else(|| {
                tracing::trace!("No {} label for {}, using qname", self.config.role, qname);
                qname.to_string()
            })
    }

    pub fn value_label(&self, value: AspectValue<'_>) -> String {
        match value {
            AspectValue::Concept(concept) => self.qname_label(concept),
            AspectValue::Period(period) => period.label(),
            AspectValue::Unit(unit) => unit.to_string(),
            AspectValue::Dimension(DimensionValue::Explicit(member)) => self.qname_label(member),
            AspectValue::Dimension(DimensionValue::Typed(value)) => value.clone(),
        }
    }

    /// Label of `fact` built from `aspects`, in the given order.
    ///
    /// Aspects the fact has no value for are skipped.
    pub fn fact_label(&self, fact: &Fact, aspects: &[Aspect]) -> String {
        aspects
            .iter()
            .filter_map(|aspect| fact.aspect_value(aspect))
            .map(|value| self.value_label(value))
            .collect::<Vec<_>>()
            .join(&self.config.separator)
    }
}
