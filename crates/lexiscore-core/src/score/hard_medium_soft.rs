//! HardMediumSoftScore - Three-level score with hard, medium, and soft constraints

use std::fmt;

use super::number::ScoreNumber;
use super::traits::Score;

/// A score with hard, medium, and soft constraint levels.
///
/// Hard constraints must be satisfied for feasibility.
/// Medium constraints have higher priority than soft constraints.
/// Soft constraints are the lowest priority optimization objectives.
///
/// Comparison order: hard > medium > soft
///
/// # Examples
///
/// ```
/// use lexiscore_core::HardMediumSoftDoubleScore;
///
/// let score1 = HardMediumSoftDoubleScore::of(0.0, -10.0, -100.0);
/// let score2 = HardMediumSoftDoubleScore::of(0.0, -5.0, -200.0);
///
/// // Better medium score wins even with worse soft score
/// assert!(score2 > score1);
/// ```
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardMediumSoftScore<N> {
    hard: N,
    medium: N,
    soft: N,
}

/// Hard/medium/soft score with native floating point levels.
pub type HardMediumSoftDoubleScore = HardMediumSoftScore<f64>;

/// Hard/medium/soft score with exact decimal levels.
#[cfg(feature = "decimal")]
pub type HardMediumSoftDecimalScore = HardMediumSoftScore<rust_decimal::Decimal>;

impl<N: ScoreNumber> HardMediumSoftScore<N> {
    /// Creates a new HardMediumSoftScore.
    #[inline]
    pub fn of(hard: N, medium: N, soft: N) -> Self {
        HardMediumSoftScore { hard, medium, soft }
    }

    /// Returns the hard score component.
    #[inline]
    pub fn hard(&self) -> N {
        self.hard
    }

    /// Returns the medium score component.
    #[inline]
    pub fn medium(&self) -> N {
        self.medium
    }

    /// Returns the soft score component.
    #[inline]
    pub fn soft(&self) -> N {
        self.soft
    }
}

impl<N: ScoreNumber> Score for HardMediumSoftScore<N> {
    type Number = N;

    #[inline]
    fn zero() -> Self {
        HardMediumSoftScore::of(N::zero(), N::zero(), N::zero())
    }

    #[inline]
    fn levels_count() -> usize {
        3
    }

    fn level_number(&self, index: usize) -> N {
        match index {
            0 => self.hard,
            1 => self.medium,
            2 => self.soft,
            _ => panic!("HardMediumSoftScore has 3 levels, got index {}", index),
        }
    }

    fn from_level_numbers(levels: &[N]) -> Self {
        assert_eq!(
            levels.len(),
            3,
            "HardMediumSoftScore requires exactly 3 levels"
        );
        HardMediumSoftScore::of(levels[0], levels[1], levels[2])
    }

    fn abs(&self) -> Self {
        HardMediumSoftScore::of(self.hard.abs(), self.medium.abs(), self.soft.abs())
    }
}

impl_score_ops!(HardMediumSoftScore { hard, medium, soft } => of);

impl<N: ScoreNumber> fmt::Debug for HardMediumSoftScore<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HardMediumSoftScore({}, {}, {})",
            self.hard, self.medium, self.soft
        )
    }
}

impl_score_text!(HardMediumSoftScore { hard => "hard", medium => "medium", soft => "soft" } => of);
