// ============================================================================
// Report Data
// serde model of a viewer report payload: concepts with labels, and facts
// ============================================================================

use crate::domain::{DimensionValue, Fact, FactBuilder, FactError, FactId, FactResult, QName};
use crate::interfaces::{FactSource, LabelDictionary, LabelRole};
use crate::numeric::{parse_decimal, Decimals};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Concept `d` marker for a typed dimension
const TYPED_DIMENSION: &str = "t";

/// Errors from loading report data.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("malformed report json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Fact(#[from] FactError),
}

/// Taxonomy data for one concept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConceptData {
    /// role → language → text
    #[serde(default)]
    pub labels: HashMap<String, HashMap<String, String>>,

    /// Dimension type marker (`"t"` for typed dimensions)
    #[serde(rename = "d", default)]
    pub dimension_type: Option<String>,
}

/// One fact as stored in the report payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFact {
    /// Aspect key → raw value
    #[serde(rename = "a", default)]
    pub aspects: BTreeMap<String, String>,

    /// Reported value; a JSON number or string
    #[serde(rename = "v", default)]
    pub value: Option<Value>,

    /// Rounding indicator; a JSON integer or `"INF"`
    #[serde(rename = "d", default)]
    pub decimals: Option<Value>,
}

/// A loaded report: the concept dictionary and the raw facts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportData {
    #[serde(default)]
    pub prefixes: BTreeMap<String, String>,

    #[serde(default)]
    pub concepts: HashMap<String, ConceptData>,

    #[serde(default)]
    pub facts: BTreeMap<String, RawFact>,
}

impl ReportData {
    /// # Errors
    /// `Json` if `json` is not a valid report payload.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let data: ReportData = serde_json::from_str(json)?;
        tracing::debug!(
            "Loaded report with {} concepts and {} facts",
            data.concepts.len(),
            data.facts.len()
        );
        Ok(data)
    }

    /// Namespace URI bound to `prefix`.
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Build a label dictionary from every concept's labels.
    ///
    /// # Errors
    /// `InvalidQName` for a concept key that is not a qname.
    pub fn label_dictionary(&self) -> FactResult<LabelDictionary> {
        let mut dictionary = LabelDictionary::new();
        for (name, concept) in &self.concepts {
            let qname: QName = name.parse()?;
            for (role, by_language) in &concept.labels {
                for (language, text) in by_language {
                    dictionary.insert(
                        qname.clone(),
                        LabelRole::from(role.as_str()),
                        language.as_str(),
                        text.as_str(),
                    );
                }
            }
        }
        Ok(dictionary)
    }

    fn is_typed_dimension(&self, dimension: &str) -> bool {
        self.concepts
            .get(dimension)
            .and_then(|c| c.dimension_type.as_deref())
            == Some(TYPED_DIMENSION)
    }

    fn build_fact(&self, id: &FactId, raw: &RawFact) -> FactResult<Fact> {
        let mut builder = FactBuilder::new(id.clone());

        for (key, value) in &raw.aspects {
            builder = if self.is_typed_dimension(key) {
                builder.dimension(key.parse()?, DimensionValue::Typed(value.clone()))
            } else {
                builder.aspect(key, value)?
            };
        }

        if let Some(value) = &raw.value {
            let text = json_text(value);
            let value = parse_decimal(&text).map_err(|source| FactError::Numeric {
                id: id.clone(),
                source,
            })?;
            builder = builder.value(value);
        }

        if let Some(decimals) = &raw.decimals {
            let decimals: Decimals = json_text(decimals).parse().map_err(|source| {
                FactError::Numeric {
                    id: id.clone(),
                    source,
                }
            })?;
            builder = builder.decimals(decimals);
        }

        builder.build()
    }
}

/// Text form of a scalar JSON value, without quotes for strings.
fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl FactSource for ReportData {
    fn fact(&self, id: &FactId) -> FactResult<Fact> {
        let raw = self
            .facts
            .get(id.as_str())
            .ok_or_else(|| FactError::UnknownFact(id.clone()))?;
        self.build_fact(id, raw)
    }

    fn fact_ids(&self) -> Vec<FactId> {
        self.facts.keys().map(|k| FactId::from(k.as_str())).collect()
    }
}
