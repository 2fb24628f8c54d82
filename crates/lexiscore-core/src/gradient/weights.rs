//! Per-level weights for blending level progress into one time gradient.

use tracing::warn;

use crate::error::ScoreError;

/// Default weight of the hard level.
pub const DEFAULT_HARD_WEIGHT: f64 = 0.75;

/// Default weight of the medium level for three-level scores.
pub const DEFAULT_MEDIUM_WEIGHT: f64 = 0.1875;

const SUM_TOLERANCE: f64 = 1e-9;

/// Weights with at most this many binary fraction digits are summed without drift.
const EXACT_FRACTION_SCALE: f64 = 1024.0;

/// Validated per-level time gradient weights.
///
/// Every weight lies in `[0.0, 1.0]` and the weights sum to `1.0`.
/// Prefer weights that are exactly representable in binary floating point,
/// such as `0.5`, `0.25`, `0.75` or `0.125`; others are accepted but logged.
///
/// # Examples
///
/// ```
/// use lexiscore_core::GradientWeights;
///
/// let weights = GradientWeights::hard_soft(0.75).unwrap();
/// assert_eq!(weights.as_slice(), &[0.75, 0.25]);
///
/// assert!(GradientWeights::hard_soft(1.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GradientWeights {
    weights: Vec<f64>,
}

impl GradientWeights {
    /// Creates weights from one value per score level, most significant first.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Configuration`] if the list is empty, a weight
    /// lies outside `[0.0, 1.0]`, or the weights do not sum to `1.0`.
    pub fn new(weights: Vec<f64>) -> Result<Self, ScoreError> {
        if weights.is_empty() {
            return Err(ScoreError::Configuration(
                "time gradient weights must cover at least one level".to_string(),
            ));
        }
        for (level, &weight) in weights.iter().enumerate() {
            check_weight(&format!("time gradient weight of level {}", level), weight)?;
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(ScoreError::Configuration(format!(
                "time gradient weights {:?} must sum to 1.0, got {}",
                weights, sum
            )));
        }
        for (level, &weight) in weights.iter().enumerate() {
            if (weight * EXACT_FRACTION_SCALE).fract() != 0.0 {
                warn!(
                    event = "inexact_gradient_weight",
                    level = level,
                    weight = weight,
                    "weight is not exactly representable as a binary fraction"
                );
            }
        }
        Ok(Self { weights })
    }

    /// Creates hard/soft weights: `hard_weight` and `1.0 - hard_weight`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Configuration`] if `hard_weight` lies outside
    /// `[0.0, 1.0]`.
    pub fn hard_soft(hard_weight: f64) -> Result<Self, ScoreError> {
        check_weight("hardScoreTimeGradientWeight", hard_weight)?;
        Self::new(vec![hard_weight, 1.0 - hard_weight])
    }

    /// Creates hard/medium/soft weights; the soft level gets the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Configuration`] if either weight lies outside
    /// `[0.0, 1.0]` or together they exceed `1.0`.
    pub fn hard_medium_soft(hard_weight: f64, medium_weight: f64) -> Result<Self, ScoreError> {
        check_weight("hardScoreTimeGradientWeight", hard_weight)?;
        check_weight("mediumScoreTimeGradientWeight", medium_weight)?;
        let remainder = 1.0 - hard_weight - medium_weight;
        if remainder < -SUM_TOLERANCE {
            return Err(ScoreError::Configuration(format!(
                "hardScoreTimeGradientWeight ({}) and mediumScoreTimeGradientWeight ({}) \
                 must not sum to more than 1.0",
                hard_weight, medium_weight
            )));
        }
        Self::new(vec![hard_weight, medium_weight, remainder.max(0.0)])
    }

    /// Weights for a single-level score: the only level gets everything.
    pub fn single() -> Self {
        Self { weights: vec![1.0] }
    }

    /// Returns the default weights for a score with `levels_count` levels.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Configuration`] for level counts other than
    /// 1, 2 or 3, which have no default and must be configured explicitly.
    pub fn default_for_levels(levels_count: usize) -> Result<Self, ScoreError> {
        match levels_count {
            1 => Ok(Self::single()),
            2 => Self::hard_soft(DEFAULT_HARD_WEIGHT),
            3 => Self::hard_medium_soft(DEFAULT_HARD_WEIGHT, DEFAULT_MEDIUM_WEIGHT),
            n => Err(ScoreError::Configuration(format!(
                "no default time gradient weights for a score with {} levels",
                n
            ))),
        }
    }

    /// Returns the weight of the level at `index`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn weight(&self, index: usize) -> f64 {
        self.weights[index]
    }

    /// Returns the number of levels these weights cover.
    #[inline]
    pub fn levels_count(&self) -> usize {
        self.weights.len()
    }

    /// Returns all weights, most significant level first.
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }
}

impl Default for GradientWeights {
    /// Hard/soft weights with [`DEFAULT_HARD_WEIGHT`].
    fn default() -> Self {
        match Self::hard_soft(DEFAULT_HARD_WEIGHT) {
            Ok(weights) => weights,
            Err(e) => unreachable!("default hard weight is valid: {}", e),
        }
    }
}

/// Checks that a single weight lies in `[0.0, 1.0]`.
///
/// # Errors
///
/// Returns [`ScoreError::Configuration`] naming `name` otherwise, including
/// for NaN.
pub fn check_weight(name: &str, weight: f64) -> Result<(), ScoreError> {
    if (0.0..=1.0).contains(&weight) {
        Ok(())
    } else {
        Err(ScoreError::Configuration(format!(
            "Property {} ({}) must be greater or equal to 0.0 and smaller or equal to 1.0.",
            name, weight
        )))
    }
}
