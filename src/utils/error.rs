//! Error handling for CLI-facing operations.
//!
//! Library parsing itself fails through `Option`/NaN (malformed input is
//! an expected value, not an error); this type covers the layers above
//! that need a real error: the CLI binary and `FromStr` impls.

use std::fmt;

/// Error type for expression handling and CLI I/O.
#[derive(Debug, Clone)]
pub enum EvalError {
    /// Input did not match any recognized grammar
    ParseError { message: String },
    /// Well-formed request with invalid content
    InvalidInput { message: String },
    /// IO error (for file/stdin operations)
    IoError { message: String },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::ParseError { message } => write!(f, "Parse error: {}", message),
            EvalError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            EvalError::IoError { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<std::io::Error> for EvalError {
    fn from(err: std::io::Error) -> Self {
        EvalError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for CLI-facing operations.
pub type EvalResult<T> = Result<T, EvalError>;

// Convenience constructors
impl EvalError {
    pub fn parse(message: impl Into<String>) -> Self {
        EvalError::ParseError {
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        EvalError::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = EvalError::parse("unexpected token");
        assert!(err.to_string().contains("Parse error"));
        assert!(err.to_string().contains("unexpected token"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EvalError = io.into();
        assert!(err.to_string().contains("IO error"));
    }
}
