// ============================================================================
// Label Configuration
// Controls how aspect values are rendered into labels
// ============================================================================

use crate::interfaces::LabelRole;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default label language
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default separator between the aspect parts of a label
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Errors from an invalid [`LabelConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("label language cannot be empty")]
    EmptyLanguage,

    #[error("label separator cannot be empty")]
    EmptySeparator,
}

/// Result type alias for configuration validation
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration for rendering labels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelConfig {
    /// Language tag used for dictionary lookups (e.g. "en", "en-GB")
    pub language: String,

    /// Label role used for dictionary lookups
    pub role: LabelRole,

    /// Separator placed between the aspect parts of a label
    pub separator: String,
}

impl LabelConfig {
    /// Create a configuration for the given language with the standard role.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    /// Builder method: Set label role
    pub fn with_role(mut self, role: LabelRole) -> Self {
        self.role = role;
        self
    }

    /// Builder method: Set part separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.language.trim().is_empty() {
            return Err(ConfigError::EmptyLanguage);
        }
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(())
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            role: LabelRole::Standard,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}
