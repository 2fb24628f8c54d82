//! Score bounds for branch-and-bound pruning.
//!
//! Bounders calculate optimistic and pessimistic score bounds for a
//! partially constructed solution, from its current score and the
//! [`ScoreTrend`] of the moves still to be applied.

use std::fmt::Debug;

use tracing::trace;

use crate::error::ScoreError;
use crate::score::{Score, ScoreNumber, ScoreTrend, TrendLevel};

/// Calculates score bounds for exhaustive search pruning.
///
/// The optimistic bound is the best score any completion of the partial
/// solution can reach; if it is not better than the best complete solution
/// found so far, the branch can be pruned. The pessimistic bound is the
/// worst score any completion can end at.
pub trait ScoreBounder<S: Score>: Send + Sync + Debug {
    /// Calculates the optimistic bound for `score`.
    fn optimistic_bound(&self, score: &S) -> Result<S, ScoreError>;

    /// Calculates the pessimistic bound for `score`.
    fn pessimistic_bound(&self, score: &S) -> Result<S, ScoreError>;
}

/// A bounder driven by a fixed initializing score trend.
///
/// # Examples
///
/// ```
/// use lexiscore_core::{HardSoftDoubleScore, ScoreBounder, ScoreTrend, TrendBounder, TrendLevel};
///
/// let bounder = TrendBounder::new(ScoreTrend::new(vec![
///     TrendLevel::OnlyDown,
///     TrendLevel::Unconstrained,
/// ]));
/// let score = HardSoftDoubleScore::of(-2.0, -10.0);
///
/// let optimistic = bounder.optimistic_bound(&score).unwrap();
/// assert_eq!(optimistic, HardSoftDoubleScore::of(-2.0, f64::INFINITY));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendBounder {
    trend: ScoreTrend,
}

impl TrendBounder {
    /// Creates a bounder for the given trend.
    pub fn new(trend: ScoreTrend) -> Self {
        Self { trend }
    }

    /// Returns the trend this bounder uses.
    pub fn trend(&self) -> &ScoreTrend {
        &self.trend
    }
}

impl<S: Score> ScoreBounder<S> for TrendBounder {
    fn optimistic_bound(&self, score: &S) -> Result<S, ScoreError> {
        build_optimistic_bound(&self.trend, score)
    }

    fn pessimistic_bound(&self, score: &S) -> Result<S, ScoreError> {
        build_pessimistic_bound(&self.trend, score)
    }
}

/// Builds the best score reachable from `score` under `trend`.
///
/// Levels whose trend is [`TrendLevel::OnlyDown`] keep their current value;
/// every other level becomes positive infinity.
///
/// # Errors
///
/// - [`ScoreError::UnsupportedBound`] if the score's representation has no
///   infinity (exact decimals), regardless of the trend.
/// - [`ScoreError::LevelCountMismatch`] if the trend has the wrong length.
pub fn build_optimistic_bound<S: Score>(trend: &ScoreTrend, score: &S) -> Result<S, ScoreError> {
    let bound = build_bound(
        trend,
        score,
        TrendLevel::OnlyDown,
        S::Number::positive_infinity(),
    )?;
    trace!(event = "optimistic_bound", score = %score, bound = %bound);
    Ok(bound)
}

/// Builds the worst score reachable from `score` under `trend`.
///
/// Levels whose trend is [`TrendLevel::OnlyUp`] keep their current value;
/// every other level becomes negative infinity.
///
/// # Errors
///
/// Same as [`build_optimistic_bound`].
pub fn build_pessimistic_bound<S: Score>(trend: &ScoreTrend, score: &S) -> Result<S, ScoreError> {
    let bound = build_bound(
        trend,
        score,
        TrendLevel::OnlyUp,
        S::Number::negative_infinity(),
    )?;
    trace!(event = "pessimistic_bound", score = %score, bound = %bound);
    Ok(bound)
}

/// Keeps the levels that cannot move past their current value in the
/// bound's direction and sends the rest to `infinity`.
fn build_bound<S: Score>(
    trend: &ScoreTrend,
    score: &S,
    final_trend: TrendLevel,
    infinity: Option<S::Number>,
) -> Result<S, ScoreError> {
    let infinity = infinity.ok_or(ScoreError::UnsupportedBound {
        representation: S::Number::REPRESENTATION,
    })?;
    if trend.levels_count() != S::levels_count() {
        return Err(ScoreError::LevelCountMismatch {
            expected: S::levels_count(),
            actual: trend.levels_count(),
        });
    }
    let levels: Vec<S::Number> = trend
        .levels()
        .iter()
        .enumerate()
        .map(|(index, &level)| {
            if level == final_trend {
                score.level_number(index)
            } else {
                infinity
            }
        })
        .collect();
    Ok(S::from_level_numbers(&levels))
}
