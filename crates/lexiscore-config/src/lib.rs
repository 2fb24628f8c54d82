//! Configuration system for lexiscore.
//!
//! Load score configuration from TOML or YAML to control time gradient
//! weights and the initializing score trend without code changes.
//! Configuration is validated as soon as it is loaded, so an out-of-range
//! weight fails before any search starts.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use lexiscore_config::{ScoreConfig, ScoreType};
//!
//! let config = ScoreConfig::from_toml_str(r#"
//!     score_type = "hard_soft_double"
//!     hard_score_time_gradient_weight = 0.5
//!     initializing_score_trend = "ONLY_DOWN/ANY"
//! "#).unwrap();
//!
//! assert_eq!(config.score_type, ScoreType::HardSoftDouble);
//! assert_eq!(config.time_gradient_weights().unwrap().as_slice(), &[0.5, 0.5]);
//! ```
//!
//! Out-of-range weights are rejected while loading:
//!
//! ```
//! use lexiscore_config::ScoreConfig;
//!
//! let result = ScoreConfig::from_toml_str("hard_score_time_gradient_weight = 1.5");
//! assert!(result.is_err());
//! ```

use std::path::Path;

use lexiscore_core::gradient::{check_weight, DEFAULT_HARD_WEIGHT, DEFAULT_MEDIUM_WEIGHT};
use lexiscore_core::{GradientWeights, ScoreError, ScoreTrend, TrendLevel};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Score configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoreConfig {
    /// Score type the search uses.
    #[serde(default)]
    pub score_type: ScoreType,

    /// Weight of the hard level in the time gradient.
    ///
    /// Must lie in `[0.0, 1.0]`. Prefer values exactly representable in
    /// binary floating point, such as 0.5, 0.25, 0.75 or 0.125.
    #[serde(default = "default_hard_weight")]
    pub hard_score_time_gradient_weight: f64,

    /// Weight of the medium level for hard/medium/soft score types.
    ///
    /// Must lie in `[0.0, 1.0]` for every score type; it only has to leave
    /// room for the soft level when the score type has a medium level.
    #[serde(default = "default_medium_weight")]
    pub medium_score_time_gradient_weight: f64,

    /// Trend of the moves applied during construction, e.g. `"ONLY_DOWN"`
    /// or `"ONLY_DOWN/ANY"`.
    #[serde(default)]
    pub initializing_score_trend: Option<String>,
}

fn default_hard_weight() -> f64 {
    DEFAULT_HARD_WEIGHT
}

fn default_medium_weight() -> f64 {
    DEFAULT_MEDIUM_WEIGHT
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            score_type: ScoreType::default(),
            hard_score_time_gradient_weight: DEFAULT_HARD_WEIGHT,
            medium_score_time_gradient_weight: DEFAULT_MEDIUM_WEIGHT,
            initializing_score_trend: None,
        }
    }
}

impl ScoreConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated("toml")
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validated("yaml")
    }

    /// Sets the score type.
    pub fn with_score_type(mut self, score_type: ScoreType) -> Self {
        self.score_type = score_type;
        self
    }

    /// Sets the hard level time gradient weight.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Configuration`] immediately if the weight lies
    /// outside `[0.0, 1.0]`.
    pub fn with_hard_score_time_gradient_weight(mut self, weight: f64) -> Result<Self, ConfigError> {
        self.hard_score_time_gradient_weight = weight;
        self.validate()?;
        Ok(self)
    }

    /// Sets the initializing score trend.
    pub fn with_initializing_score_trend(mut self, trend: impl Into<String>) -> Result<Self, ConfigError> {
        self.initializing_score_trend = Some(trend.into());
        self.validate()?;
        Ok(self)
    }

    /// Checks that the weights and trend fit the score type.
    ///
    /// Both weights are range-checked whatever the score type, so a bad
    /// value fails on load even when the score type does not use it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_weight(
            "hard_score_time_gradient_weight",
            self.hard_score_time_gradient_weight,
        )?;
        check_weight(
            "medium_score_time_gradient_weight",
            self.medium_score_time_gradient_weight,
        )?;
        self.time_gradient_weights()?;
        self.initializing_score_trend()?;
        Ok(())
    }

    /// Builds the time gradient weights for the configured score type.
    pub fn time_gradient_weights(&self) -> Result<GradientWeights, ConfigError> {
        let weights = match self.score_type.levels_count() {
            1 => GradientWeights::single(),
            2 => GradientWeights::hard_soft(self.hard_score_time_gradient_weight)?,
            _ => GradientWeights::hard_medium_soft(
                self.hard_score_time_gradient_weight,
                self.medium_score_time_gradient_weight,
            )?,
        };
        Ok(weights)
    }

    /// Returns the initializing score trend, defaulting to an unconstrained
    /// trend on every level.
    pub fn initializing_score_trend(&self) -> Result<ScoreTrend, ConfigError> {
        let levels_count = self.score_type.levels_count();
        match &self.initializing_score_trend {
            Some(text) => ScoreTrend::parse(text, levels_count)
                .map_err(|e| ConfigError::Invalid(e.message)),
            None => Ok(ScoreTrend::uniform(TrendLevel::Unconstrained, levels_count)),
        }
    }

    fn validated(self, format: &str) -> Result<Self, ConfigError> {
        self.validate()?;
        debug!(
            event = "score_config_loaded",
            format = format,
            score_type = ?self.score_type,
            hard_weight = self.hard_score_time_gradient_weight,
        );
        Ok(self)
    }
}

/// Score types a configuration can select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreType {
    /// Single level, `f64`.
    SimpleDouble,

    /// Single level, exact decimal.
    SimpleDecimal,

    /// Hard and soft levels, `f64`.
    #[default]
    HardSoftDouble,

    /// Hard and soft levels, exact decimal.
    HardSoftDecimal,

    /// Hard, medium and soft levels, `f64`.
    HardMediumSoftDouble,

    /// Hard, medium and soft levels, exact decimal.
    HardMediumSoftDecimal,
}

impl ScoreType {
    /// Returns the number of levels of this score type.
    pub fn levels_count(&self) -> usize {
        match self {
            ScoreType::SimpleDouble | ScoreType::SimpleDecimal => 1,
            ScoreType::HardSoftDouble | ScoreType::HardSoftDecimal => 2,
            ScoreType::HardMediumSoftDouble | ScoreType::HardMediumSoftDecimal => 3,
        }
    }

    /// Returns true if this score type can build optimistic and pessimistic
    /// bounds; exact decimals cannot represent infinity.
    pub fn supports_bounds(&self) -> bool {
        matches!(
            self,
            ScoreType::SimpleDouble | ScoreType::HardSoftDouble | ScoreType::HardMediumSoftDouble
        )
    }
}
