//! The single failure the evaluator can report.

use std::fmt;

use thiserror::Error;

/// Which of the two observational tests a score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    Float,
    Candling,
}

impl TestKind {
    /// Field name used in batch files and validation messages.
    pub fn field(&self) -> &'static str {
        match self {
            TestKind::Float => "float_score",
            TestKind::Candling => "candle_score",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestKind::Float => write!(f, "floating score"),
            TestKind::Candling => write!(f, "candling score"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A float or candling score outside {0, 1, 2}. The message is fixed
    /// regardless of which score failed.
    #[error("Floating and Candling Scores must be 0, 1, or 2.")]
    InvalidScore { test: TestKind, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_fixed() {
        let float = DomainError::InvalidScore {
            test: TestKind::Float,
            value: 3.0,
        };
        let candle = DomainError::InvalidScore {
            test: TestKind::Candling,
            value: -1.0,
        };
        assert_eq!(
            float.to_string(),
            "Floating and Candling Scores must be 0, 1, or 2."
        );
        assert_eq!(float.to_string(), candle.to_string());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(TestKind::Float.field(), "float_score");
        assert_eq!(TestKind::Candling.field(), "candle_score");
    }
}
