// ============================================================================
// Label Resolution Interface
// Defines the contract for looking up taxonomy labels by qname
// ============================================================================

use crate::domain::QName;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Role of a taxonomy label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum LabelRole {
    /// Standard label ("std")
    Standard,
    /// Terse label ("terse")
    Terse,
    /// Verbose label ("verbose")
    Verbose,
    /// Documentation ("doc")
    Documentation,
    /// Any other role, by its report key
    Other(String),
}

impl LabelRole {
    pub fn as_str(&self) -> &str {
        match self {
            LabelRole::Standard => "std",
            LabelRole::Terse => "terse",
            LabelRole::Verbose => "verbose",
            LabelRole::Documentation => "doc",
            LabelRole::Other(role) => role,
        }
    }
}

impl From<&str> for LabelRole {
    fn from(role: &str) -> Self {
        match role {
            "std" => LabelRole::Standard,
            "terse" => LabelRole::Terse,
            "verbose" => LabelRole::Verbose,
            "doc" => LabelRole::Documentation,
            other => LabelRole::Other(other.to_string()),
        }
    }
}

impl From<String> for LabelRole {
    fn from(role: String) -> Self {
        LabelRole::from(role.as_str())
    }
}

impl From<LabelRole> for String {
    fn from(role: LabelRole) -> Self {
        role.as_str().to_string()
    }
}

impl FromStr for LabelRole {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LabelRole::from(s))
    }
}

impl fmt::Display for LabelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only label lookup service consumed when rendering labels.
///
/// Implementations must be safe to share between threads; the engine never
/// mutates them.
pub trait LabelResolver: Send + Sync {
    /// Look up the label of `qname` for `role` in `language`.
    ///
    /// Returns `None` when no such label exists; callers fall back to the
    /// qname itself.
    fn resolve_label(&self, qname: &QName, role: &LabelRole, language: &str) -> Option<String>;
}

/// Resolver with no labels; every lookup misses.
pub struct NoLabels;

impl LabelResolver for NoLabels {
    fn resolve_label(&self, _qname: &QName, _role: &LabelRole, _language: &str) -> Option<String> {
        None
    }
}

/// In-memory label dictionary: qname → role → language → text.
#[derive(Debug, Clone, Default)]
pub struct LabelDictionary {
    labels: HashMap<QName, HashMap<LabelRole, HashMap<String, String>>>,
}

impl LabelDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a label.
    pub fn insert(
        &mut self,
        qname: QName,
        role: LabelRole,
        language: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.labels
            .entry(qname)
            .or_default()
            .entry(role)
            .or_default()
            .insert(language.into(), text.into());
    }

    /// Builder method: Add a label
    pub fn with_label(
        mut self,
        qname: QName,
        role: LabelRole,
        language: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(qname, role, language, text);
        self
    }

    /// Number of qnames with at least one label
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl LabelResolver for LabelDictionary {
    /// Tries the exact language tag, then its primary subtag
    /// (`en-GB` falls back to `en`).
    fn resolve_label(&self, qname: &QName, role: &LabelRole, language: &str) -> Option<String> {
        let by_language = self.labels.get(qname)?.get(role)?;
        if let Some(text) = by_language.get(language) {
            return Some(text.clone());
        }
        let primary = language.split(['-', '_']).next()?;
        by_language.get(primary).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qname(s: &str) -> QName {
        s.parse().unwrap()
    }

    fn dictionary() -> LabelDictionary {
        LabelDictionary::new()
            .with_label(qname("eg:Concept1"), LabelRole::Standard, "en", "Concept 1")
            .with_label(qname("eg:Concept1"), LabelRole::Terse, "en", "C1")
            .with_label(qname("eg:Concept1"), LabelRole::Standard, "fr", "Concept un")
    }

    #[test]
    fn test_label_role_keys() {
        assert_eq!(LabelRole::from("std"), LabelRole::Standard);
        assert_eq!(LabelRole::from("doc"), LabelRole::Documentation);
        assert_eq!(
            LabelRole::from("period-start"),
            LabelRole::Other("period-start".to_string())
        );
        assert_eq!(LabelRole::Verbose.to_string(), "verbose");
        assert_eq!("terse".parse::<LabelRole>().unwrap(), LabelRole::Terse);
    }

    #[test]
    fn test_dictionary_lookup() {
        let labels = dictionary();
        assert_eq!(labels.len(), 1);
        assert_eq!(
            labels.resolve_label(&qname("eg:Concept1"), &LabelRole::Standard, "en"),
            Some("Concept 1".to_string())
        );
        assert_eq!(
            labels.resolve_label(&qname("eg:Concept1"), &LabelRole::Terse, "en"),
            Some("C1".to_string())
        );
        assert_eq!(
            labels.resolve_label(&qname("eg:Concept1"), &LabelRole::Standard, "fr"),
            Some("Concept un".to_string())
        );
    }

    #[test]
    fn test_dictionary_misses() {
        let labels = dictionary();
        assert_eq!(
            labels.resolve_label(&qname("eg:Concept4"), &LabelRole::Standard, "en"),
            None
        );
        assert_eq!(
            labels.resolve_label(&qname("eg:Concept1"), &LabelRole::Verbose, "en"),
            None
        );
        assert_eq!(
            labels.resolve_label(&qname("eg:Concept1"), &LabelRole::Standard, "de"),
            None
        );
    }

    #[test]
    fn test_language_falls_back_to_primary_subtag() {
        let labels = dictionary();
        assert_eq!(
            labels.resolve_label(&qname("eg:Concept1"), &LabelRole::Standard, "en-GB"),
            Some("Concept 1".to_string())
        );
    }

    #[test]
    fn test_no_labels() {
        assert!(NoLabels
            .resolve_label(&qname("eg:Concept1"), &LabelRole::Standard, "en")
            .is_none());
    }
}
