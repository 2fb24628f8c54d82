//! Numeric representations a score level can be stored in.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use num_traits::{Signed, ToPrimitive};

/// Numeric representation of a single score level.
///
/// Implemented for `f64` (native floating point) and, with the `decimal`
/// feature, for [`rust_decimal::Decimal`] (exact fixed-point decimal).
/// Score types are generic over this trait so the gradient and bound
/// arithmetic is written once for both representations.
pub trait ScoreNumber:
    Copy + Debug + Display + Default + PartialOrd + Signed + ToPrimitive + Send + Sync + 'static
{
    /// Short name of the representation, used in diagnostics.
    const REPRESENTATION: &'static str;

    /// Total order used for lexicographic score comparison.
    ///
    /// Unlike `PartialOrd`, this never returns "unordered", so scores can
    /// implement `Ord`. Numerically equal values compare equal.
    fn compare_level(&self, other: &Self) -> Ordering;

    /// Positive infinity, or `None` if the representation has no infinity.
    fn positive_infinity() -> Option<Self>;

    /// Negative infinity, or `None` if the representation has no infinity.
    fn negative_infinity() -> Option<Self>;

    /// Returns `(value - start) / (end - start)` as `f64`.
    ///
    /// The differences and the quotient are computed in this representation
    /// where it can hold them, and in `f64` otherwise, so this never panics
    /// on overflow.
    fn progress(value: Self, start: Self, end: Self) -> f64;

    /// Parses a single level value from its textual form.
    fn parse_level(text: &str) -> Result<Self, String>;
}

impl ScoreNumber for f64 {
    const REPRESENTATION: &'static str = "double";

    #[inline]
    fn compare_level(&self, other: &Self) -> Ordering {
        // Adding 0.0 turns -0.0 into 0.0 and leaves everything else as is.
        (self + 0.0).total_cmp(&(other + 0.0))
    }

    #[inline]
    fn positive_infinity() -> Option<Self> {
        Some(f64::INFINITY)
    }

    #[inline]
    fn negative_infinity() -> Option<Self> {
        Some(f64::NEG_INFINITY)
    }

    #[inline]
    fn progress(value: Self, start: Self, end: Self) -> f64 {
        (value - start) / (end - start)
    }

    fn parse_level(text: &str) -> Result<Self, String> {
        text.parse::<f64>().map_err(|e| e.to_string())
    }
}

#[cfg(feature = "decimal")]
impl ScoreNumber for rust_decimal::Decimal {
    const REPRESENTATION: &'static str = "decimal";

    #[inline]
    fn compare_level(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline]
    fn positive_infinity() -> Option<Self> {
        None
    }

    #[inline]
    fn negative_infinity() -> Option<Self> {
        None
    }

    fn progress(value: Self, start: Self, end: Self) -> f64 {
        // Exact differences and quotient first; fall back to float
        // arithmetic when any step overflows the decimal range.
        let exact = value
            .checked_sub(start)
            .zip(end.checked_sub(start))
            .and_then(|(numerator, denominator)| numerator.checked_div(denominator))
            .and_then(|ratio| ratio.to_f64());
        match exact {
            Some(ratio) => ratio,
            None => {
                let value = value.to_f64().unwrap_or(f64::NAN);
                let start = start.to_f64().unwrap_or(f64::NAN);
                let end = end.to_f64().unwrap_or(f64::NAN);
                (value - start) / (end - start)
            }
        }
    }

    fn parse_level(text: &str) -> Result<Self, String> {
        text.parse::<rust_decimal::Decimal>()
            .map_err(|e| e.to_string())
    }
}
