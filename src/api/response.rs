//! Response types for the payroll HTTP API.
//!
//! This module defines the success bodies that are not plain models, the
//! error response structure, and the mapping from [`PayrollError`] to HTTP
//! status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;
use crate::models::{Position, Worker, WorkerId};

/// Body returned when an entity is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// The id assigned by the registry.
    pub id: u32,
}

/// A worker without their records, as shown in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerSummary {
    /// The worker's id.
    pub id: WorkerId,
    /// The worker's surname.
    pub surname: String,
    /// The worker's position.
    pub position: Position,
    /// Number of work records attached to the worker.
    pub record_count: usize,
}

impl From<&Worker> for WorkerSummary {
    fn from(worker: &Worker) -> Self {
        Self {
            id: worker.id(),
            surname: worker.surname().to_string(),
            position: worker.position(),
            record_count: worker.records().len(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying the given error.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let message = error.to_string();
        match error {
            PayrollError::WorkerNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("WORKER_NOT_FOUND", message),
            },
            PayrollError::WorkTypeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("WORK_TYPE_NOT_FOUND", message),
            },
            PayrollError::SurnameNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("SURNAME_NOT_FOUND", message),
            },
            PayrollError::InvalidInput { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    message,
                    format!("The field '{}' failed validation", field),
                ),
            },
            PayrollError::ConfigNotFound { .. }
            | PayrollError::ConfigParseError { .. }
            | PayrollError::Io(_) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("INTERNAL_ERROR", "Internal error", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let api_error: ApiErrorResponse = PayrollError::WorkerNotFound { id: 9 }.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "WORKER_NOT_FOUND");
        assert_eq!(api_error.error.message, "Worker not found: 9");

        let api_error: ApiErrorResponse = PayrollError::WorkTypeNotFound { id: 2 }.into();
        assert_eq!(api_error.error.code, "WORK_TYPE_NOT_FOUND");
    }

    #[test]
    fn test_invalid_input_maps_to_400() {
        let api_error: ApiErrorResponse =
            PayrollError::invalid_input("rate", "must be greater than zero").into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_INPUT");
        assert!(api_error.error.details.unwrap().contains("rate"));
    }

    #[test]
    fn test_config_error_maps_to_500() {
        let api_error: ApiErrorResponse = PayrollError::ConfigNotFound {
            path: "x".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
