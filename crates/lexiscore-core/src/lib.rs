//! Lexiscore Core - Score arithmetic for constraint solving
//!
//! This crate provides the numeric core a search algorithm uses to reason
//! about lexicographic multi-level scores:
//! - Score types generic over `f64` or exact decimal levels
//! - Time gradients that turn score progress into a ratio in `[0, 1]`
//! - Feasibility gradients that track the hard level's approach to zero
//! - Optimistic and pessimistic bounds for branch-and-bound pruning
//!
//! Every operation is a pure function over immutable values.

pub mod bound;
pub mod error;
pub mod gradient;
pub mod score;

#[cfg(test)]
mod bound_tests;

pub use bound::{build_optimistic_bound, build_pessimistic_bound, ScoreBounder, TrendBounder};
pub use error::ScoreError;
pub use gradient::{
    feasibility_gradient, try_feasibility_gradient, GradientWeights, TimeGradientCalculator,
};
pub use score::{
    HardMediumSoftDoubleScore, HardMediumSoftScore, HardSoftDoubleScore, HardSoftScore,
    ParseableScore, Score, ScoreNumber, ScoreParseError, ScoreTrend, SimpleDoubleScore,
    SimpleScore, TrendLevel,
};

#[cfg(feature = "decimal")]
pub use score::{HardMediumSoftDecimalScore, HardSoftDecimalScore, SimpleDecimalScore};
