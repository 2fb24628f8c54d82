//! SimpleScore - Single-level score implementation

use std::fmt;

use super::number::ScoreNumber;
use super::traits::Score;

/// A simple score with a single value.
///
/// Useful when there's only one type of constraint to optimize. The single
/// level doubles as the feasibility level.
///
/// # Examples
///
/// ```
/// use lexiscore_core::{Score, SimpleDoubleScore};
///
/// let score1 = SimpleDoubleScore::of(-5.0);
/// let score2 = SimpleDoubleScore::of(-3.0);
///
/// assert!(score2 > score1);  // -3 is better than -5
/// assert!(!score1.is_feasible());  // Negative scores are not feasible
/// ```
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleScore<N> {
    score: N,
}

/// Single-level score with a native floating point value.
pub type SimpleDoubleScore = SimpleScore<f64>;

/// Single-level score with an exact decimal value.
#[cfg(feature = "decimal")]
pub type SimpleDecimalScore = SimpleScore<rust_decimal::Decimal>;

impl<N: ScoreNumber> SimpleScore<N> {
    /// Creates a new SimpleScore with the given value.
    #[inline]
    pub fn of(score: N) -> Self {
        SimpleScore { score }
    }

    /// Returns the score value.
    #[inline]
    pub fn score(&self) -> N {
        self.score
    }
}

impl<N: ScoreNumber> Score for SimpleScore<N> {
    type Number = N;

    #[inline]
    fn zero() -> Self {
        SimpleScore::of(N::zero())
    }

    #[inline]
    fn levels_count() -> usize {
        1
    }

    fn level_number(&self, index: usize) -> N {
        assert_eq!(index, 0, "SimpleScore has 1 level, got index {}", index);
        self.score
    }

    fn from_level_numbers(levels: &[N]) -> Self {
        assert_eq!(levels.len(), 1, "SimpleScore requires exactly 1 level");
        SimpleScore::of(levels[0])
    }

    fn abs(&self) -> Self {
        SimpleScore::of(self.score.abs())
    }
}

impl_score_ops!(SimpleScore { score } => of);

impl<N: ScoreNumber> fmt::Debug for SimpleScore<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SimpleScore({})", self.score)
    }
}

impl_score_text!(SimpleScore { score => "" } => of);
