//! Lexiscore - lexicographic score arithmetic for constraint solvers
//!
//! Score types, time gradients and score bounds in one import.
//!
//! # Example
//!
//! ```rust
//! use lexiscore::prelude::*;
//!
//! let config = ScoreConfig::from_toml_str("hard_score_time_gradient_weight = 0.75").unwrap();
//! let calculator =
//!     TimeGradientCalculator::<HardSoftDoubleScore>::new(config.time_gradient_weights().unwrap())
//!         .unwrap();
//!
//! let start = HardSoftDoubleScore::parse("-5hard/-100soft").unwrap();
//! let end = HardSoftDoubleScore::parse("0hard/0soft").unwrap();
//! assert_eq!(calculator.time_gradient(&start, &end, &end), 1.0);
//! ```

// Score types
pub use lexiscore_core::score::{
    HardMediumSoftDoubleScore, HardMediumSoftScore, HardSoftDoubleScore, HardSoftScore,
    ParseableScore, Score, ScoreNumber, ScoreParseError, ScoreTrend,
    SimpleDoubleScore, SimpleScore, TrendLevel,
};

#[cfg(feature = "decimal")]
pub use lexiscore_core::score::{
    HardMediumSoftDecimalScore, HardSoftDecimalScore, SimpleDecimalScore,
};

// Gradients and bounds
pub use lexiscore_core::{
    build_optimistic_bound, build_pessimistic_bound, feasibility_gradient,
    try_feasibility_gradient, GradientWeights, ScoreBounder, ScoreError, TimeGradientCalculator,
    TrendBounder,
};

// Configuration
pub use lexiscore_config::{ConfigError, ScoreConfig, ScoreType};

pub mod prelude {
    pub use super::{
        feasibility_gradient, GradientWeights, HardMediumSoftDoubleScore, HardSoftDoubleScore,
        ParseableScore, Score, ScoreBounder, ScoreConfig, ScoreTrend, SimpleDoubleScore,
        TimeGradientCalculator, TrendBounder, TrendLevel,
    };

    #[cfg(feature = "decimal")]
    pub use super::HardSoftDecimalScore;
}
