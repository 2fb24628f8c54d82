//! Initializing score trends.
//!
//! A trend states, per score level, which direction the moves that are
//! still to be applied during construction can push that level. Bound
//! construction uses it to decide which levels are already final.

use std::fmt;
use std::str::FromStr;

use super::traits::ScoreParseError;

/// Direction the remaining moves can shift a single score level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TrendLevel {
    /// No guarantee: the level can move either way.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "ANY"))]
    Unconstrained,

    /// Remaining moves only increase or hold this level.
    OnlyUp,

    /// Remaining moves only decrease or hold this level.
    OnlyDown,
}

impl TrendLevel {
    /// Returns the canonical text token for this trend level.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendLevel::Unconstrained => "UNCONSTRAINED",
            TrendLevel::OnlyUp => "ONLY_UP",
            TrendLevel::OnlyDown => "ONLY_DOWN",
        }
    }
}

impl fmt::Display for TrendLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendLevel {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UNCONSTRAINED" | "ANY" => Ok(TrendLevel::Unconstrained),
            "ONLY_UP" => Ok(TrendLevel::OnlyUp),
            "ONLY_DOWN" => Ok(TrendLevel::OnlyDown),
            _ => Err(ScoreParseError {
                message: format!(
                    "Invalid trend level '{}': expected ONLY_UP, ONLY_DOWN or UNCONSTRAINED",
                    s.trim()
                ),
            }),
        }
    }
}

/// Per-level trend specification for a score type.
///
/// # Examples
///
/// ```
/// use lexiscore_core::{ScoreTrend, TrendLevel};
///
/// let trend = ScoreTrend::parse("ONLY_DOWN/UNCONSTRAINED", 2).unwrap();
/// assert_eq!(trend.level(0), TrendLevel::OnlyDown);
/// assert_eq!(trend.to_string(), "ONLY_DOWN/UNCONSTRAINED");
///
/// // A single token applies to every level.
/// let uniform = ScoreTrend::parse("ONLY_DOWN", 3).unwrap();
/// assert!(uniform.is_only_down());
/// assert_eq!(uniform.levels_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreTrend {
    levels: Vec<TrendLevel>,
}

impl ScoreTrend {
    /// Creates a trend from one trend level per score level.
    pub fn new(levels: Vec<TrendLevel>) -> Self {
        Self { levels }
    }

    /// Creates a trend that applies the same trend level to every score level.
    pub fn uniform(level: TrendLevel, levels_count: usize) -> Self {
        Self {
            levels: vec![level; levels_count],
        }
    }

    /// Parses a `/`-separated trend for a score with `levels_count` levels.
    ///
    /// A single token is expanded to a uniform trend.
    pub fn parse(text: &str, levels_count: usize) -> Result<Self, ScoreParseError> {
        let trend: ScoreTrend = text.parse()?;
        if trend.levels_count() == levels_count {
            return Ok(trend);
        }
        if let &[single] = trend.levels() {
            return Ok(Self::uniform(single, levels_count));
        }
        Err(ScoreParseError {
            message: format!(
                "Trend '{}' has {} levels but the score has {} levels",
                text.trim(),
                trend.levels_count(),
                levels_count
            ),
        })
    }

    /// Returns the trend levels, most significant first.
    pub fn levels(&self) -> &[TrendLevel] {
        &self.levels
    }

    /// Returns the trend level at `index`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    pub fn level(&self, index: usize) -> TrendLevel {
        self.levels[index]
    }

    /// Returns the number of levels this trend covers.
    pub fn levels_count(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if every level only goes up.
    pub fn is_only_up(&self) -> bool {
        self.levels.iter().all(|&level| level == TrendLevel::OnlyUp)
    }

    /// Returns true if every level only goes down.
    pub fn is_only_down(&self) -> bool {
        self.levels.iter().all(|&level| level == TrendLevel::OnlyDown)
    }
}

impl fmt::Display for ScoreTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.levels.iter().map(TrendLevel::as_str).collect();
        f.write_str(&tokens.join("/"))
    }
}

impl FromStr for ScoreTrend {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let levels = s
            .split('/')
            .map(str::parse::<TrendLevel>)
            .collect::<Result<Vec<TrendLevel>, _>>()?;
        Ok(Self::new(levels))
    }
}
