//! Response types for the Tutor Match Engine API.
//!
//! This module defines the success bodies, the error body, and the mapping
//! from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{MatchResult, Student, StudentSummary, Tutor};

/// Body of a successful matching request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingResponse {
    /// Always `true`.
    pub success: bool,
    /// The student the ranking was computed for.
    pub student: StudentSummary,
    /// Tutors ranked by descending score.
    pub matches: Vec<MatchResult>,
}

/// Body of `GET /students`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentsResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// All stored students.
    pub students: Vec<Student>,
}

/// Body of `GET /tutors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorsResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// All stored tutors.
    pub tutors: Vec<Tutor>,
}

/// Body of a successful import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Number of records imported.
    pub imported: usize,
}

/// Body of a successful bulk delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Number of records removed.
    pub deleted: usize,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Always `false`.
    pub success: bool,
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    #[serde(rename = "error")]
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
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
            success: false,
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an invalid student ID error response.
    pub fn invalid_student_id(id: &str) -> Self {
        Self::with_details(
            "INVALID_STUDENT_ID",
            "A valid student ID is required",
            format!("'{}' is not a valid student ID", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidTime { .. }
            | EngineError::InvalidWeekday { .. }
            | EngineError::InvalidSlot { .. }
            | EngineError::InvalidProfile { .. } => {
                ApiErrorResponse::bad_request(ApiError::validation_error(message))
            }
            EngineError::ImportError { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("IMPORT_ERROR", message))
            }
            EngineError::StudentNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "STUDENT_NOT_FOUND",
                    "Student not found",
                    format!("No student has ID '{}'", id),
                ),
            },
            EngineError::NoTutorsAvailable => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("NO_TUTORS_AVAILABLE", message),
            },
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidWeights { .. }
            | EngineError::SeedDataError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}
