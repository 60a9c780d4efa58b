use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: duration must be positive, got {0}ms")]
    InvalidDuration(f64),

    #[error("Invalid configuration: start value has {start} dimensions but end value has {end}")]
    DimensionMismatch { start: usize, end: usize },

    #[error("Invalid configuration: animated values need at least one dimension")]
    EmptyValue,

    #[error("Invalid run state: expected {expected}, found {actual}")]
    InvalidState {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Unknown easing function: {0}")]
    UnknownEasing(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error rejects a run before it could start
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidDuration(_) | Error::DimensionMismatch { .. } | Error::EmptyValue
        )
    }
}

/// Non-fatal report: a progress value outside [0, 1] reached an easing
/// that is not designed to overshoot. The computation still proceeds.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("progress {input} is outside [0, 1] for easing '{easing}'")]
pub struct DomainWarning {
    pub easing: String,
    pub input: f64,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_classified() {
        assert!(Error::InvalidDuration(0.0).is_invalid_configuration());
        assert!(Error::DimensionMismatch { start: 2, end: 3 }.is_invalid_configuration());
        assert!(Error::EmptyValue.is_invalid_configuration());
        assert!(!Error::UnknownEasing("wobble".into()).is_invalid_configuration());
    }

    #[test]
    fn test_domain_warning_message() {
        let warning = DomainWarning {
            easing: "quad-in".into(),
            input: 1.5,
        };
        assert_eq!(
            warning.to_string(),
            "progress 1.5 is outside [0, 1] for easing 'quad-in'"
        );
    }
}
