use thiserror::Error;

/// Errors raised while loading an instance file.
///
/// Line numbers are physical, 1-based line numbers in the source text.
#[derive(Error, Debug)]
pub enum InstanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing line for {field} (expected after line {after})")]
    MissingLine { field: &'static str, after: usize },

    #[error("line {line}: {field} needs {expected} values, found {found}")]
    TooFewValues {
        line: usize,
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid integer '{token}' in {field}")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        token: String,
    },

    #[error("line {line}: value {value} in {field} overflows when converted to minutes")]
    Overflow {
        line: usize,
        field: &'static str,
        value: i64,
    },
}

/// Errors raised by [`EvaluatorConfig::validate`](crate::config::EvaluatorConfig::validate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("penalty weight must be finite and positive, got {0}")]
    PenaltyWeight(f64),

    #[error("empty-schedule makespan must be finite and non-negative, got {0}")]
    EmptyMakespan(f64),
}
