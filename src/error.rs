//! Error types for agrupar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for agrupar operations.
///
/// Provides detailed context about failures including invalid
/// hyperparameters, dimension mismatches, and malformed persisted records.
///
/// # Examples
///
/// ```
/// use agrupar::error::AgruparError;
///
/// let err = AgruparError::DimensionMismatch {
///     expected: 42,
///     actual: 21,
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum AgruparError {
    /// Input vector length doesn't match the model's established dimension.
    DimensionMismatch {
        /// Expected input length
        expected: usize,
        /// Actual input length found
        actual: usize,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A persisted row could not be parsed.
    ///
    /// Recovered locally during loads (the row is skipped with a warning);
    /// this variant never aborts a whole load.
    MalformedRecord {
        /// 1-based line number in the source file
        line: usize,
        /// What went wrong with the row
        message: String,
    },

    /// I/O error (permission denied, disk full, etc.).
    ///
    /// A missing file on load is NOT an error: it means "start from an
    /// empty model".
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AgruparError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgruparError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Vector dimension mismatch: expected {expected}, got {actual}"
                )
            }
            AgruparError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            AgruparError::MalformedRecord { line, message } => {
                write!(f, "Malformed record at line {line}: {message}")
            }
            AgruparError::Io(e) => write!(f, "I/O error: {e}"),
            AgruparError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AgruparError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AgruparError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AgruparError {
    fn from(err: std::io::Error) -> Self {
        AgruparError::Io(err)
    }
}

impl From<&str> for AgruparError {
    fn from(msg: &str) -> Self {
        AgruparError::Other(msg.to_string())
    }
}

impl From<String> for AgruparError {
    fn from(msg: String) -> Self {
        AgruparError::Other(msg)
    }
}

impl From<csv::Error> for AgruparError {
    fn from(err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => AgruparError::Io(io_err),
            other => AgruparError::Other(format!("CSV error: {other:?}")),
        }
    }
}

impl AgruparError {
    /// Create an invalid hyperparameter error from a float value.
    #[must_use]
    pub fn invalid_hyperparameter(param: &str, value: f32, constraint: &str) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: format!("{value}"),
            constraint: constraint.to_string(),
        }
    }

    /// Create a malformed record error for a 1-based source line.
    #[must_use]
    pub fn malformed_record(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for AgruparError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<AgruparError> for &str {
    fn eq(&self, other: &AgruparError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, AgruparError>;
