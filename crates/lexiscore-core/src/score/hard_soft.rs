//! HardSoftScore - Two-level score with hard and soft constraints

use std::fmt;

use super::number::ScoreNumber;
use super::traits::Score;

/// A score with separate hard and soft constraint levels.
///
/// Hard constraints must be satisfied for a solution to be feasible.
/// Soft constraints are optimization objectives.
///
/// When comparing scores:
/// 1. Hard scores are compared first
/// 2. Soft scores are only compared when hard scores are equal
///
/// The level representation `N` is either `f64` ([`HardSoftDoubleScore`])
/// or an exact decimal ([`HardSoftDecimalScore`]).
///
/// # Examples
///
/// ```
/// use lexiscore_core::{HardSoftDoubleScore, Score};
///
/// let score1 = HardSoftDoubleScore::of(-1.0, -100.0);  // 1 hard constraint broken
/// let score2 = HardSoftDoubleScore::of(0.0, -200.5);   // Feasible but poor soft score
///
/// // Feasible solutions are always better than infeasible ones
/// assert!(score2 > score1);
/// assert!(score2.is_feasible());
///
/// let score3 = HardSoftDoubleScore::of(0.0, -50.0);    // Better soft score
/// assert!(score3 > score2);
/// ```
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardSoftScore<N> {
    hard: N,
    soft: N,
}

/// Hard/soft score with native floating point levels.
pub type HardSoftDoubleScore = HardSoftScore<f64>;

/// Hard/soft score with exact decimal levels.
#[cfg(feature = "decimal")]
pub type HardSoftDecimalScore = HardSoftScore<rust_decimal::Decimal>;

impl<N: ScoreNumber> HardSoftScore<N> {
    /// Creates a new HardSoftScore.
    #[inline]
    pub fn of(hard: N, soft: N) -> Self {
        HardSoftScore { hard, soft }
    }

    /// Returns the hard score component.
    #[inline]
    pub fn hard(&self) -> N {
        self.hard
    }

    /// Returns the soft score component.
    #[inline]
    pub fn soft(&self) -> N {
        self.soft
    }
}

impl<N: ScoreNumber> Score for HardSoftScore<N> {
    type Number = N;

    #[inline]
    fn zero() -> Self {
        HardSoftScore::of(N::zero(), N::zero())
    }

    #[inline]
    fn levels_count() -> usize {
        2
    }

    fn level_number(&self, index: usize) -> N {
        match index {
            0 => self.hard,
            1 => self.soft,
            _ => panic!("HardSoftScore has 2 levels, got index {}", index),
        }
    }

    fn from_level_numbers(levels: &[N]) -> Self {
        assert_eq!(levels.len(), 2, "HardSoftScore requires exactly 2 levels");
        HardSoftScore::of(levels[0], levels[1])
    }

    fn abs(&self) -> Self {
        HardSoftScore::of(self.hard.abs(), self.soft.abs())
    }
}

impl_score_ops!(HardSoftScore { hard, soft } => of);

impl<N: ScoreNumber> fmt::Debug for HardSoftScore<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HardSoftScore({}, {})", self.hard, self.soft)
    }
}

impl_score_text!(HardSoftScore { hard => "hard", soft => "soft" } => of);
