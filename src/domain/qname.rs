// ============================================================================
// Qualified Names
// ============================================================================

use super::errors::FactError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A `prefix:local` qualified name, as used for concepts, dimensions,
/// members and unit measures.
///
/// Ordering is by prefix, then local name. This is the order in which
/// dimension aspects are considered when building labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct QName {
    prefix: String,
    local: String,
}

impl QName {
    /// Create a qname from its parts.
    ///
    /// # Errors
    /// Returns `InvalidQName` if either part is empty or contains `:`.
    pub fn new(prefix: impl Into<String>, local: impl Into<String>) -> Result<Self, FactError> {
        let prefix = prefix.into();
        let local = local.into();
        if !Self::valid_part(&prefix) || !Self::valid_part(&local) {
            return Err(FactError::InvalidQName(format!("{}:{}", prefix, local)));
        }
        Ok(Self { prefix, local })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn local_name(&self) -> &str {
        &self.local
    }

    fn valid_part(part: &str) -> bool {
        !part.is_empty() && !part.contains(':') && !part.contains(char::is_whitespace)
    }
}

impl FromStr for QName {
    type Err = FactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(':') {
            Some((prefix, local)) => {
                Self::new(prefix, local).map_err(|_| FactError::InvalidQName(s.to_string()))
            },
            None => Err(FactError::InvalidQName(s.to_string())),
        }
    }
}

impl TryFrom<String> for QName {
    type Error = FactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QName> for String {
    fn from(qname: QName) -> Self {
        qname.to_string()
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.local)
    }
}
