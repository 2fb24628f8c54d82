//! Error types for lexiscore

use thiserror::Error;

/// Main error type for score arithmetic operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// Invalid calculator configuration (e.g. a gradient weight outside `[0, 1]`)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The numeric representation cannot express the infinities a bound needs
    #[error(
        "Unsupported bound: {representation} scores do not support bounds \
         because a {representation} cannot represent infinity"
    )]
    UnsupportedBound {
        /// Name of the numeric representation, e.g. `"decimal"`.
        representation: &'static str,
    },

    /// The caller broke a documented precondition
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// A per-level input does not match the score's level count
    #[error("Level count mismatch: expected {expected} levels, got {actual}")]
    LevelCountMismatch { expected: usize, actual: usize },
}

/// Result type alias for score arithmetic operations
pub type Result<T> = std::result::Result<T, ScoreError>;
