// ============================================================================
// Unit Aspect
// ============================================================================

use super::errors::FactError;
use super::QName;
use std::fmt;
use std::str::FromStr;

/// Unit of a numeric fact: a product of numerator measures, optionally
/// divided by a product of denominator measures (`iso4217:USD/xbrli:shares`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Unit {
    numerators: Vec<QName>,
    denominators: Vec<QName>,
}

impl Unit {
    /// # Errors
    /// Returns `InvalidUnit` if there are no numerator measures.
    pub fn new(numerators: Vec<QName>, denominators: Vec<QName>) -> Result<Self, FactError> {
        if numerators.is_empty() {
            return Err(FactError::InvalidUnit(String::new()));
        }
        Ok(Self {
            numerators,
            denominators,
        })
    }

    pub fn numerators(&self) -> &[QName] {
        &self.numerators
    }

    pub fn denominators(&self) -> &[QName] {
        &self.denominators
    }

    /// True for a single-measure unit with no denominator.
    pub fn is_simple(&self) -> bool {
        self.numerators.len() == 1 && self.denominators.is_empty()
    }
}

impl From<QName> for Unit {
    fn from(measure: QName) -> Self {
        Self {
            numerators: vec![measure],
            denominators: Vec::new(),
        }
    }
}

fn parse_measures(s: &str, whole: &str) -> Result<Vec<QName>, FactError> {
    s.split('*')
        .map(|m| {
            m.parse::<QName>()
                .map_err(|_| FactError::InvalidUnit(whole.to_string()))
        })
        .collect()
}

impl FromStr for Unit {
    type Err = FactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (num, denom) = match s.split_once('/') {
            Some((num, denom)) => (num, Some(denom)),
            None => (s, None),
        };

        let numerators = parse_measures(num, s)?;
        let denominators = match denom {
            Some(denom) => parse_measures(denom, s)?,
            None => Vec::new(),
        };
        Ok(Self {
            numerators,
            denominators,
        })
    }
}

fn write_measures(f: &mut fmt::Formatter<'_>, measures: &[QName]) -> fmt::Result {
    for (i, m) in measures.iter().enumerate() {
        if i > 0 {
            write!(f, "*")?;
        }
        write!(f, "{}", m)?;
    }
    Ok(())
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_measures(f, &self.numerators)?;
        if !self.denominators.is_empty() {
            write!(f, "/")?;
            write_measures(f, &self.denominators)?;
        }
        Ok(())
    }
}
