// ============================================================================
// Period Aspect
// ============================================================================

use super::errors::FactError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Display format for period labels, e.g. `31 Dec 2018`.
const LABEL_DATE_FORMAT: &str = "%d %b %Y";

/// The period of a fact.
///
/// Dates are stored end-exclusive: an instant of `2019-01-01` marks the
/// start of that day, i.e. the close of `31 Dec 2018`. A duration covers
/// `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Period {
    Instant(NaiveDate),
    Duration { start: NaiveDate, end: NaiveDate },
}

impl Period {
    /// Create a duration period.
    ///
    /// # Errors
    /// Returns `InvalidPeriod` unless `end` is after `start`.
    pub fn duration(start: NaiveDate, end: NaiveDate) -> Result<Self, FactError> {
        if end <= start {
            return Err(FactError::InvalidPeriod(format!("{}/{}", start, end)));
        }
        Ok(Period::Duration { start, end })
    }

    pub fn is_instant(&self) -> bool {
        matches!(self, Period::Instant(_))
    }

    /// Human-readable label.
    ///
    /// Instants show the day before the stored date; durations show their
    /// first day and the day before their stored end.
    pub fn label(&self) -> String {
        match self {
            Period::Instant(date) => format_inclusive_end(*date),
            Period::Duration { start, end } => format!(
                "{} to {}",
                start.format(LABEL_DATE_FORMAT),
                format_inclusive_end(*end)
            ),
        }
    }
}

fn format_inclusive_end(date: NaiveDate) -> String {
    date.pred_opt()
        .unwrap_or(date)
        .format(LABEL_DATE_FORMAT)
        .to_string()
}

fn parse_date(s: &str, whole: &str) -> Result<NaiveDate, FactError> {
    // Any time component is ignored
    let date = s.split('T').next().unwrap_or(s);
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| FactError::InvalidPeriod(whole.to_string()))
}

impl FromStr for Period {
    type Err = FactError;

    /// Parse `YYYY-MM-DD` (instant) or `YYYY-MM-DD/YYYY-MM-DD` (duration).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('/') {
            Some((start, end)) => {
                let start = parse_date(start, s)?;
                let end = parse_date(end, s)?;
                Period::duration(start, end).map_err(|_| FactError::InvalidPeriod(s.to_string()))
            },
            None => parse_date(s, s).map(Period::Instant),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Instant(date) => write!(f, "{}", date),
            Period::Duration { start, end } => write!(f, "{}/{}", start, end),
        }
    }
}
