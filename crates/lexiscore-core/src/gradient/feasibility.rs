//! Feasibility gradient: progress of the hard level toward zero.

use num_traits::Zero;

use crate::error::ScoreError;
use crate::score::{Score, ScoreNumber};

/// Returns how far the hard level of `score` has moved from the hard level
/// of `start` toward zero, capped at `1.0`.
///
/// Returns `0.0` when the hard level has not improved since `start`.
///
/// # Errors
///
/// Returns [`ScoreError::Precondition`] if `start` is already feasible
/// (hard level >= 0): the ratio is undefined there.
///
/// # Examples
///
/// ```
/// use lexiscore_core::{try_feasibility_gradient, HardSoftDoubleScore};
///
/// let start = HardSoftDoubleScore::of(-10.0, 0.0);
/// let score = HardSoftDoubleScore::of(-4.0, -30.0);
/// assert_eq!(try_feasibility_gradient(&start, &score).unwrap(), 0.6);
///
/// let feasible = HardSoftDoubleScore::of(0.0, 0.0);
/// assert!(try_feasibility_gradient(&feasible, &score).is_err());
/// ```
pub fn try_feasibility_gradient<S: Score>(start: &S, score: &S) -> Result<f64, ScoreError> {
    let start_hard = start.level_number(0);
    let hard = score.level_number(0);

    if start_hard >= S::Number::zero() {
        return Err(ScoreError::Precondition(format!(
            "start score ({}) is already feasible, so its feasibility gradient is undefined",
            start
        )));
    }
    if hard <= start_hard {
        return Ok(0.0);
    }
    let time_gradient = S::Number::progress(hard, start_hard, S::Number::zero());
    Ok(time_gradient.min(1.0))
}

/// Panicking form of [`try_feasibility_gradient`].
///
/// # Panics
/// Panics if `start` is already feasible.
pub fn feasibility_gradient<S: Score>(start: &S, score: &S) -> f64 {
    match try_feasibility_gradient(start, score) {
        Ok(time_gradient) => time_gradient,
        Err(e) => panic!("{}", e),
    }
}
