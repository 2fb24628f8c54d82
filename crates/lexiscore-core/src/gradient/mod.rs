//! Time gradients: search progress expressed as a ratio in `[0, 1]`.
//!
//! A time gradient replaces elapsed wall-clock time in search-parameter
//! schedules (such as an annealing temperature) with the position of the
//! current score between a start score and an end score. Given the same
//! move sequence, the schedule is therefore fully reproducible.
//!
//! - [`TimeGradientCalculator`] blends all levels with [`GradientWeights`].
//! - [`feasibility_gradient`] tracks only the hard level's approach to zero.

mod feasibility;
mod time;
mod weights;


pub use feasibility::{feasibility_gradient, try_feasibility_gradient};
pub use time::TimeGradientCalculator;
pub use weights::{check_weight, GradientWeights, DEFAULT_HARD_WEIGHT, DEFAULT_MEDIUM_WEIGHT};
