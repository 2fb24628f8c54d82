//! Score types for representing solution quality
//!
//! Scores are used to compare solutions and guide the optimization process.
//! All score types are immutable value objects, generic over the numeric
//! representation of their levels.

#[macro_use]
mod macros;

mod hard_medium_soft;
mod hard_soft;
mod number;
mod simple;
pub(crate) mod traits;
mod trend;

#[cfg(test)]
mod tests;

pub use hard_medium_soft::{HardMediumSoftDoubleScore, HardMediumSoftScore};
pub use hard_soft::{HardSoftDoubleScore, HardSoftScore};
pub use number::ScoreNumber;
pub use simple::{SimpleDoubleScore, SimpleScore};
pub use traits::{ParseableScore, Score, ScoreParseError};
pub use trend::{ScoreTrend, TrendLevel};

#[cfg(feature = "decimal")]
pub use hard_medium_soft::HardMediumSoftDecimalScore;
#[cfg(feature = "decimal")]
pub use hard_soft::HardSoftDecimalScore;
#[cfg(feature = "decimal")]
pub use simple::SimpleDecimalScore;
