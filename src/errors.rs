//! Error types for the health advisor
//!
//! Every failure a single assessment run can hit. Malformed numbers are
//! fatal to the run; nothing is retried.

use thiserror::Error;

/// Main error type for the health advisor
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// A numeric field could not be parsed
    #[error("Invalid value for {field}: '{input}' is not a number")]
    InvalidNumber { field: String, input: String },

    /// Input ended before every field was answered
    #[error("Input closed before {field} was entered")]
    InputClosed { field: String },

    /// User interrupted the prompt (Ctrl-C)
    #[error("Assessment interrupted")]
    Interrupted,

    /// Line editor failures other than EOF/interrupt
    #[error("Readline error: {0}")]
    Readline(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

impl From<rustyline::error::ReadlineError> for AdvisorError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        match err {
            rustyline::error::ReadlineError::Interrupted => AdvisorError::Interrupted,
            rustyline::error::ReadlineError::Io(e) => AdvisorError::Io(e),
            other => AdvisorError::Readline(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_display() {
        let err = AdvisorError::InvalidNumber {
            field: "temperature".to_string(),
            input: "warm".to_string(),
        };
        assert!(err.to_string().contains("temperature"));
        assert!(err.to_string().contains("warm"));
    }

    #[test]
    fn test_input_closed_display() {
        let err = AdvisorError::InputClosed {
            field: "heart rate".to_string(),
        };
        assert_eq!(err.to_string(), "Input closed before heart rate was entered");
    }

    #[test]
    fn test_readline_interrupt_maps_to_interrupted() {
        let err: AdvisorError = rustyline::error::ReadlineError::Interrupted.into();
        assert!(matches!(err, AdvisorError::Interrupted));
    }

    #[test]
    fn test_io_and_serialization_conversions() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: AdvisorError = rustyline::error::ReadlineError::Io(io).into();
        assert!(matches!(err, AdvisorError::Io(_)));

        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: AdvisorError = json_err.into();
        assert!(matches!(err, AdvisorError::Serialization(_)));
    }
}
