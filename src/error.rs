//! Error types for the payroll registry.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the registry, its configuration and its front-ends
//! can report.

use thiserror::Error;

use crate::models::{WorkTypeId, WorkerId};

/// The coarse classification of a [`PayrollError`].
///
/// Callers that only need to decide how to report a failure (for example
/// which HTTP status to use) match on the kind rather than on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A worker or work type id, or a surname, did not resolve.
    NotFound,
    /// A required string was empty or a numeric value was out of range.
    InvalidInput,
    /// The configuration file was missing or malformed.
    Config,
    /// Reading from or writing to the console failed.
    Io,
}

/// The main error type for the payroll registry.
///
/// # Example
///
/// ```
/// use payroll_registry::error::{ErrorKind, PayrollError};
///
/// let error = PayrollError::WorkerNotFound { id: 999 };
/// assert_eq!(error.to_string(), "Worker not found: 999");
/// assert_eq!(error.kind(), ErrorKind::NotFound);
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// No worker has the requested id.
    #[error("Worker not found: {id}")]
    WorkerNotFound {
        /// The id that did not resolve.
        id: WorkerId,
    },

    /// No work type has the requested id.
    #[error("Work type not found: {id}")]
    WorkTypeNotFound {
        /// The id that did not resolve.
        id: WorkTypeId,
    },

    /// No worker has the requested surname.
    #[error("No worker with surname '{surname}'")]
    SurnameNotFound {
        /// The surname that was searched for.
        surname: String,
    },

    /// A value supplied to the registry violated its constraints.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The name of the offending field.
        field: String,
        /// A description of the violated constraint.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Console or socket I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PayrollError {
    /// Creates an [`PayrollError::InvalidInput`] for the given field.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::WorkerNotFound { .. }
            | Self::WorkTypeNotFound { .. }
            | Self::SurnameNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::ConfigNotFound { .. } | Self::ConfigParseError { .. } => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_not_found_displays_id() {
        let error = PayrollError::WorkerNotFound { id: 42 };
        assert_eq!(error.to_string(), "Worker not found: 42");
    }

    #[test]
    fn test_work_type_not_found_displays_id() {
        let error = PayrollError::WorkTypeNotFound { id: 7 };
        assert_eq!(error.to_string(), "Work type not found: 7");
    }

    #[test]
    fn test_surname_not_found_displays_surname() {
        let error = PayrollError::SurnameNotFound {
            surname: "Smith".to_string(),
        };
        assert_eq!(error.to_string(), "No worker with surname 'Smith'");
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = PayrollError::invalid_input("rate", "must be greater than zero");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'rate': must be greater than zero"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(PayrollError::WorkerNotFound { id: 1 }.kind(), ErrorKind::NotFound);
        assert_eq!(
            PayrollError::WorkTypeNotFound { id: 1 }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            PayrollError::SurnameNotFound {
                surname: "X".to_string()
            }
            .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            PayrollError::invalid_input("name", "empty").kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            PayrollError::ConfigNotFound {
                path: "x".to_string()
            }
            .kind(),
            ErrorKind::Config
        );
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
        assert_eq!(PayrollError::from(io).kind(), ErrorKind::Io);
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> PayrollResult<()> {
            Err(PayrollError::WorkerNotFound { id: 3 })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
