// ============================================================================
// Rounding Intervals
// Exact decimal intervals implied by a reported value and its precision
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest scale a `rust_decimal::Decimal` can carry.
const MAX_SCALE: u32 = 28;

// ============================================================================
// Decimals (rounding indicator)
// ============================================================================

/// The `decimals` attribute of a numeric fact.
///
/// `Finite(d)` means the value was rounded to the nearest multiple of
/// `10^(-d)`. `d` may be negative (rounded to tens, hundreds, ...).
/// `Infinite` (`INF`) means the value is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Decimals {
    Finite(i32),
    Infinite,
}

impl Decimals {
    /// Half the width of the rounding interval, i.e. `0.5 * 10^(-d)`.
    ///
    /// Returns `None` for `INF`, where there is no rounding at all.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if `d` needs more fractional digits than a
    ///   decimal can hold
    /// - `Overflow` if `-d` is so large that the half-width is unrepresentable
    pub fn half_width(self) -> NumericResult<Option<Decimal>> {
        let d = match self {
            Decimals::Infinite => return Ok(None),
            Decimals::Finite(d) => d,
        };

        if d >= 0 {
            // 0.5 * 10^(-d) == 5 * 10^-(d + 1)
            let scale = d.unsigned_abs() + 1;
            if scale > MAX_SCALE {
                return Err(NumericError::PrecisionOutOfRange {
                    decimals: d,
                    max: MAX_SCALE - 1,
                });
            }
            return Ok(Some(Decimal::new(5, scale)));
        }

        // 0.5 * 10^|d| == 5 * 10^(|d| - 1)
        let ten = Decimal::from(10);
        let mut half = Decimal::from(5);
        for _ in 1..d.unsigned_abs() {
            half = half.checked_mul(ten).ok_or(NumericError::Overflow)?;
        }
        Ok(Some(half))
    }
}

impl fmt::Display for Decimals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decimals::Finite(d) => write!(f, "{}", d),
            Decimals::Infinite => write!(f, "INF"),
        }
    }
}

impl FromStr for Decimals {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("INF") {
            return Ok(Decimals::Infinite);
        }
        s.parse::<i32>()
            .map(Decimals::Finite)
            .map_err(|_| NumericError::InvalidDecimals(s.to_string()))
    }
}

/// Parse a reported value into an exact decimal.
///
/// Accepts plain (`"-1234.50"`) and scientific (`"1.5e3"`) notation.
pub fn parse_decimal(s: &str) -> NumericResult<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| NumericError::InvalidDecimal(s.to_string()))
}

/// Number of digits before the decimal point of `value` (0 when `|value| < 1`).
fn integer_digits(value: Decimal) -> u32 {
    let ten = Decimal::from(10);
    let mut n = value.abs().trunc();
    let mut digits = 0;
    while n >= Decimal::ONE {
        n = (n / ten).trunc();
        digits += 1;
    }
    digits
}

// ============================================================================
// Value Interval
// ============================================================================

/// Closed interval `[a, b]` of exact decimals, with `a <= b`.
///
/// A zero-width interval (`a == b`) is a valid, non-empty interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValueInterval {
    /// Lower bound (inclusive)
    pub a: Decimal,
    /// Upper bound (inclusive)
    pub b: Decimal,
}

impl ValueInterval {
    /// Create an interval, or `None` if `a > b`.
    pub fn new(a: Decimal, b: Decimal) -> Option<Self> {
        (a <= b).then_some(Self { a, b })
    }

    /// Zero-width interval containing exactly `value`.
    pub fn point(value: Decimal) -> Self {
        Self { a: value, b: value }
    }

    /// The interval of true values that round to `value` at the given
    /// precision: `[value - 0.5 * 10^(-d), value + 0.5 * 10^(-d)]`.
    ///
    /// # Errors
    /// Propagates [`Decimals::half_width`] errors, returns `Overflow` if
    /// either bound falls outside the decimal range, and
    /// `PrecisionOutOfRange` if a bound needs more significant digits than a
    /// decimal can hold.
    pub fn from_rounding(value: Decimal, decimals: Decimals) -> NumericResult<Self> {
        let (d, half) = match (decimals, decimals.half_width()?) {
            (Decimals::Finite(d), Some(half)) => (d, half),
            _ => return Ok(Self::point(value)),
        };

        let a = value.checked_sub(half).ok_or(NumericError::Overflow)?;
        let b = value.checked_add(half).ok_or(NumericError::Overflow)?;

        // Decimal addition rounds rather than failing once the mantissa is full
        let exact = value.checked_sub(a) == Some(half) && b.checked_sub(value) == Some(half);
        if !exact {
            return Err(NumericError::PrecisionOutOfRange {
                decimals: d,
                max: (MAX_SCALE - 1).saturating_sub(integer_digits(value)),
            });
        }
        Ok(Self { a, b })
    }

    /// Intersection of two intervals, or `None` if they are disjoint.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        Self::new(self.a.max(other.a), self.b.min(other.b))
    }

    /// Intersection of every interval in `intervals`.
    ///
    /// Returns `None` for an empty input or an empty intersection. The lower
    /// bound is the maximum of all lower bounds and the upper bound the
    /// minimum of all upper bounds, so the result does not depend on order.
    pub fn intersect_all<I>(intervals: I) -> Option<Self>
    where
        I: IntoIterator<Item = ValueInterval>,
    {
        let mut iter = intervals.into_iter();
        let first = iter.next()?;
        let (a, b) = iter.fold((first.a, first.b), |(a, b), next| {
            (a.max(next.a), b.min(next.b))
        });
        Self::new(a, b)
    }

    #[inline]
    pub fn contains(&self, value: Decimal) -> bool {
        self.a <= value && value <= self.b
    }

    #[inline]
    pub fn width(&self) -> Decimal {
        self.b - self.a
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        self.a == self.b
    }
}

impl fmt::Display for ValueInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.a, self.b)
    }
}

// ============================================================================
// Tests
// ============================================================================
