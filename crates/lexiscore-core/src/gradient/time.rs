//! Blended time gradient over all score levels.

use std::fmt;
use std::marker::PhantomData;

use crate::error::ScoreError;
use crate::score::{Score, ScoreNumber};

use super::weights::GradientWeights;

/// Computes how far a score has progressed from a start score to an end score.
///
/// The calculator is configured once with [`GradientWeights`] matching the
/// score type's level count and is then a pure function of three score
/// snapshots. It holds no mutable state and can be shared across threads.
///
/// # Examples
///
/// ```
/// use lexiscore_core::{GradientWeights, HardSoftDoubleScore, TimeGradientCalculator};
///
/// let calculator =
///     TimeGradientCalculator::<HardSoftDoubleScore>::new(GradientWeights::hard_soft(0.75).unwrap())
///         .unwrap();
///
/// let start = HardSoftDoubleScore::of(0.0, -100.0);
/// let end = HardSoftDoubleScore::of(0.0, 0.0);
///
/// // Start and end share the hard level: full hard weight.
/// // Soft level halfway: 0.5 * 0.25.
/// let current = HardSoftDoubleScore::of(0.0, -50.0);
/// assert_eq!(calculator.time_gradient(&start, &end, &current), 0.875);
/// ```
pub struct TimeGradientCalculator<S> {
    weights: GradientWeights,
    _phantom: PhantomData<fn() -> S>,
}

impl<S: Score> TimeGradientCalculator<S> {
    /// Creates a calculator for score type `S`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::LevelCountMismatch`] if the weights do not
    /// cover exactly `S::levels_count()` levels.
    pub fn new(weights: GradientWeights) -> Result<Self, ScoreError> {
        if weights.levels_count() != S::levels_count() {
            return Err(ScoreError::LevelCountMismatch {
                expected: S::levels_count(),
                actual: weights.levels_count(),
            });
        }
        Ok(Self {
            weights,
            _phantom: PhantomData,
        })
    }

    /// Creates a calculator with the default weights for `S`'s level count.
    pub fn with_default_weights() -> Result<Self, ScoreError> {
        Self::new(GradientWeights::default_for_levels(S::levels_count())?)
    }

    /// Returns the configured weights.
    pub fn weights(&self) -> &GradientWeights {
        &self.weights
    }

    /// Returns the progress of `score` from `start` to `end`.
    ///
    /// - If `score` is better than `end`, returns `1.0`.
    /// - If `score` is worse than `start`, returns `0.0`.
    /// - Otherwise sums one weighted contribution per level. The hard level
    ///   contributes its full weight when `start` and `end` agree on it, and
    ///   its unclamped linear ratio otherwise. Every lower level saturates:
    ///   full weight at or past `end`, nothing at or before `start`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Precondition`] if `start` is better than `end`.
    pub fn try_time_gradient(&self, start: &S, end: &S, score: &S) -> Result<f64, ScoreError> {
        if start > end {
            return Err(ScoreError::Precondition(format!(
                "start score ({}) must not be better than end score ({})",
                start, end
            )));
        }
        if score > end {
            return Ok(1.0);
        } else if score < start {
            return Ok(0.0);
        }

        let mut time_gradient = 0.0;
        for level in 0..S::levels_count() {
            let weight = self.weights.weight(level);
            let start_level = start.level_number(level);
            let end_level = end.level_number(level);
            let level_value = score.level_number(level);

            if level == 0 {
                if start_level == end_level {
                    time_gradient += weight;
                } else {
                    let ratio = S::Number::progress(level_value, start_level, end_level);
                    time_gradient += ratio * weight;
                }
            } else if level_value >= end_level {
                time_gradient += weight;
            } else if level_value <= start_level {
                // No progress on this level
            } else {
                let ratio = S::Number::progress(level_value, start_level, end_level);
                time_gradient += ratio * weight;
            }
        }
        Ok(time_gradient)
    }

    /// Returns the progress of `score` from `start` to `end`.
    ///
    /// See [`try_time_gradient`](Self::try_time_gradient).
    ///
    /// # Panics
    /// Panics if `start` is better than `end`.
    pub fn time_gradient(&self, start: &S, end: &S, score: &S) -> f64 {
        match self.try_time_gradient(start, end, score) {
            Ok(time_gradient) => time_gradient,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<S> Clone for TimeGradientCalculator<S> {
    fn clone(&self) -> Self {
        Self {
            weights: self.weights.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<S> fmt::Debug for TimeGradientCalculator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeGradientCalculator")
            .field("weights", &self.weights.as_slice())
            .finish()
    }
}
