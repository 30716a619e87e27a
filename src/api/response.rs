//! Response types for the payroll API.
//!
//! This module defines the success envelopes, the error response
//! structures, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{GenerationFailure, PayrollRecord, PreviewRow};

/// A per-employee failure as rendered on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeError {
    /// The employee whose generation or preview failed.
    pub employee_id: String,
    /// Human-readable failure message.
    pub message: String,
}

impl From<GenerationFailure> for EmployeeError {
    fn from(failure: GenerationFailure) -> Self {
        Self {
            employee_id: failure.employee_id,
            message: failure.reason,
        }
    }
}

/// Response body for `/payroll/generate`.
///
/// `success` reflects that the batch ran; per-employee failures live in
/// `errors`, so callers render "generated for N of M employees".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Whether the batch ran to completion.
    pub success: bool,
    /// Records created by this run.
    pub data: Vec<PayrollRecord>,
    /// Employees that already had a record for the month.
    pub skipped: Vec<String>,
    /// Per-employee failures.
    pub errors: Vec<EmployeeError>,
}

/// Response body for `/payroll/preview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// Whether the preview ran to completion.
    pub success: bool,
    /// Computed preview rows.
    pub data: Vec<PreviewRow>,
    /// Per-employee failures.
    pub errors: Vec<EmployeeError>,
}

/// Response body for `GET /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// Whether the listing succeeded.
    pub success: bool,
    /// The matching records.
    pub data: Vec<PayrollRecord>,
}

/// Response body for the status-transition endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    /// Whether the transition succeeded.
    pub success: bool,
    /// The record after the transition.
    pub data: PayrollRecord,
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

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidMonth { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(error.to_string()),
            },
            EngineError::DuplicateRecord { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("DUPLICATE_RECORD", error.to_string()),
            },
            EngineError::RecordNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("RECORD_NOT_FOUND", error.to_string()),
            },
            EngineError::InvalidTransition { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "INVALID_TRANSITION",
                    error.to_string(),
                    "The record has already been reviewed and finalized",
                ),
            },
            EngineError::EmployeeData { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_EMPLOYEE", error.to_string()),
            },
            EngineError::TransientStore { .. } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::new("STORE_UNAVAILABLE", error.to_string()),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParse { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::new("CONFIG_ERROR", error.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_invalid_month_maps_to_400() {
        let engine_error = EngineError::InvalidMonth {
            value: "bad".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_invalid_transition_maps_to_409() {
        let engine_error = EngineError::InvalidTransition {
            record_id: uuid::Uuid::new_v4(),
            status: crate::models::PayrollStatus::Paid,
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "INVALID_TRANSITION");
    }

    #[test]
    fn test_record_not_found_maps_to_404() {
        let engine_error = EngineError::RecordNotFound {
            record_id: uuid::Uuid::new_v4(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_transient_store_maps_to_503() {
        let engine_error = EngineError::TransientStore {
            store: "attendance".to_string(),
            message: "timeout".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(api_error.error.code, "STORE_UNAVAILABLE");
    }

    #[test]
    fn test_employee_error_from_generation_failure() {
        let failure = GenerationFailure {
            employee_id: "emp_001".to_string(),
            reason: EngineError::DuplicateRecord {
                company_id: "acme".to_string(),
                employee_id: "emp_001".to_string(),
                month: crate::models::PayMonth::from_str("2026-03").unwrap(),
            }
            .to_string(),
        };

        let error: EmployeeError = failure.into();
        assert_eq!(error.employee_id, "emp_001");
        assert!(error.message.contains("already generated"));
    }
}
