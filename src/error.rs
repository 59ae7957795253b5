use crate::models::Dimension;
use thiserror::Error;

/// Errors surfaced by the scoring core.
///
/// Variants fall into three kinds: lookup failures (a categorical value is
/// missing from a static table), configuration failures (the injected tables
/// or criteria are malformed), and domain failures (an input is outside the
/// documented domain of a scorer). Scoring is deterministic and has no I/O,
/// so none of these are retryable.
#[derive(Debug, Error)]
pub enum ScoringError {
    // Lookup failures
    #[error("location '{0}' is not in the coordinate registry")]
    UnknownLocation(String),
    #[error("no distance entry for '{from}' -> '{to}'")]
    MissingDistance { from: String, to: String },
    #[error("'{value}' is not covered by the {table} affinity table")]
    UnknownCategory { table: &'static str, value: String },

    // Configuration failures
    #[error("weight for {0} must be a positive integer")]
    ZeroWeight(Dimension),
    #[error("no weight configured for scored dimension {0}")]
    MissingWeight(Dimension),
    #[error("criteria for {0} must not be empty")]
    EmptyCriteria(Dimension),
    #[error("no dimension scores were supplied")]
    NoScores,

    // Domain failures
    #[error("invalid {name} range: min {min} is greater than max {max}")]
    InvalidRange {
        name: &'static str,
        min: i64,
        max: i64,
    },
    #[error("salary criteria minimum must be positive")]
    NonPositiveSalaryMinimum,
    #[error("ordinal score must be 1, 2 or 3, got {0}")]
    InvalidOrdinal(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_value() {
        let err = ScoringError::UnknownLocation("Atlantis".to_string());
        assert!(err.to_string().contains("Atlantis"));

        let err = ScoringError::UnknownCategory {
            table: "sector",
            value: "Astrology".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sector") && msg.contains("Astrology"));
    }

    #[test]
    fn test_range_error_reports_bounds() {
        let err = ScoringError::InvalidRange {
            name: "experience",
            min: 5,
            max: 3,
        };
        assert!(err.to_string().contains("min 5 is greater than max 3"));
    }
}
