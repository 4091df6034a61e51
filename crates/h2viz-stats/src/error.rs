//! Error types for h2viz-stats

use thiserror::Error;

/// Errors raised when a sample cannot be scaled
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Empty sample or a non-finite element
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl StatsError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        StatsError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type alias for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = StatsError::invalid_input("empty sample");
        assert_eq!(err.to_string(), "Invalid input: empty sample");
    }
}
