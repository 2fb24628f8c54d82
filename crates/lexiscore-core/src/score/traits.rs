//! Core Score trait definition

use std::fmt::{Debug, Display};
use std::ops::{Add, Neg, Sub};

use num_traits::Zero;

use super::number::ScoreNumber;

/// Core trait for all score types in lexiscore.
///
/// A score is a fixed-length tuple of level values, compared
/// lexicographically with level 0 as the most significant level.
/// The level values are stored in a [`ScoreNumber`] representation
/// (`f64` or an exact decimal), and the level count is fixed per type.
///
/// All score implementations must be:
/// - Immutable (operations return new instances)
/// - Thread-safe (Send + Sync)
/// - Comparable (total ordering)
pub trait Score:
    Copy
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Numeric representation of each level.
    type Number: ScoreNumber;

    /// Returns the zero score (identity element for addition).
    fn zero() -> Self;

    /// Returns the number of score levels.
    ///
    /// For example:
    /// - SimpleScore: 1 level
    /// - HardSoftScore: 2 levels
    /// - HardMediumSoftScore: 3 levels
    fn levels_count() -> usize;

    /// Returns how many leading levels decide feasibility.
    fn feasible_levels_count() -> usize {
        1
    }

    /// Returns the value of the level at `index`, highest priority first.
    ///
    /// # Panics
    /// Panics if `index >= levels_count()`.
    fn level_number(&self, index: usize) -> Self::Number;

    /// Creates a score from level numbers.
    ///
    /// # Panics
    /// Panics if the number of levels doesn't match `levels_count()`.
    fn from_level_numbers(levels: &[Self::Number]) -> Self;

    /// Returns the absolute value of this score.
    fn abs(&self) -> Self;

    /// Returns the score values, highest priority first.
    fn to_level_numbers(&self) -> Vec<Self::Number> {
        (0..Self::levels_count())
            .map(|index| self.level_number(index))
            .collect()
    }

    /// Returns true if this score represents a feasible solution.
    ///
    /// A score is feasible when each of its first
    /// [`feasible_levels_count`](Self::feasible_levels_count) levels is >= 0.
    fn is_feasible(&self) -> bool {
        let zero = Self::Number::zero();
        (0..Self::feasible_levels_count()).all(|index| self.level_number(index) >= zero)
    }
}

/// Marker trait for scores that can be parsed from a string.
pub trait ParseableScore: Score {
    /// Parses a score from a string representation.
    ///
    /// # Format
    /// - SimpleScore: "42" or "-1.5"
    /// - HardSoftScore: "0hard/-100soft" or "-1hard/-2.5soft"
    /// - HardMediumSoftScore: "0hard/0medium/-100soft"
    fn parse(s: &str) -> Result<Self, ScoreParseError>;

    /// Returns the string representation of this score.
    ///
    /// Parsing the returned string yields an equal score.
    fn to_string_repr(&self) -> String;
}

/// Error when parsing a score from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreParseError {
    pub message: String,
}

impl std::fmt::Display for ScoreParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score parse error: {}", self.message)
    }
}

impl std::error::Error for ScoreParseError {}
