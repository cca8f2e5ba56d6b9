//! HTTP request handlers for the Tutor Match Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::import::{students_from_rows, tutors_from_rows};
use crate::matching::rank_matches_with_weights;

use super::request::ImportRequest;
use super::response::{
    ApiError, ApiErrorResponse, DeleteResponse, HealthResponse, ImportResponse, MatchingResponse,
    StudentsResponse, TutorsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/matching/students/:student_id", get(matching_handler))
        .route("/students/matching/:student_id", get(matching_handler))
        .route(
            "/students",
            get(list_students_handler).delete(delete_students_handler),
        )
        .route("/students/import", post(import_students_handler))
        .route(
            "/tutors",
            get(list_tutors_handler).delete(delete_tutors_handler),
        )
        .route("/tutors/import", post(import_tutors_handler));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Maps a body extraction failure to a 400 error body.
fn rejection_error(rejection: JsonRejection, correlation_id: &Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for GET /api/matching/students/:student_id.
///
/// Ranks every stored tutor for the student.
async fn matching_handler(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        student_id = %student_id,
        "Processing matching request"
    );

    let Ok(id) = Uuid::parse_str(student_id.trim()) else {
        warn!(correlation_id = %correlation_id, student_id = %student_id, "Invalid student ID");
        return error_response(ApiErrorResponse::bad_request(ApiError::invalid_student_id(
            &student_id,
        )));
    };

    let Some(student) = state.store().find_student(id).await else {
        warn!(correlation_id = %correlation_id, student_id = %id, "Student not found");
        return error_response(
            EngineError::StudentNotFound { id: id.to_string() }.into(),
        );
    };

    let tutors = state.store().tutors().await;
    if tutors.is_empty() {
        warn!(correlation_id = %correlation_id, "No tutors available");
        return error_response(EngineError::NoTutorsAvailable.into());
    }

    let start_time = Instant::now();
    match rank_matches_with_weights(&student, &tutors, state.weights()) {
        Ok(matches) => {
            info!(
                correlation_id = %correlation_id,
                student_id = %student.id,
                tutors_count = tutors.len(),
                best_score = matches.first().map(|m| m.matching_score),
                duration_us = start_time.elapsed().as_micros(),
                "Matching completed successfully"
            );
            json_response(
                StatusCode::OK,
                MatchingResponse {
                    success: true,
                    student: student.summary(),
                    matches,
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Matching failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /api/students.
async fn list_students_handler(State(state): State<AppState>) -> Response {
    let students = state.store().students().await;
    json_response(
        StatusCode::OK,
        StudentsResponse {
            success: true,
            message: format!("{} student(s) found", students.len()),
            students,
        },
    )
}

/// Handler for DELETE /api/students.
async fn delete_students_handler(State(state): State<AppState>) -> Response {
    let deleted = state.store().clear_students().await;
    info!(deleted, "Deleted all students");
    json_response(
        StatusCode::OK,
        DeleteResponse {
            success: true,
            message: "All students have been deleted".to_string(),
            deleted,
        },
    )
}

/// Handler for POST /api/students/import.
async fn import_students_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing student import");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(rejection_error(
                rejection,
                &correlation_id,
            )));
        }
    };

    match students_from_rows(&request.rows) {
        Ok(students) => {
            let imported = state.store().insert_students(students).await;
            info!(correlation_id = %correlation_id, imported, "Students imported");
            json_response(
                StatusCode::OK,
                ImportResponse {
                    success: true,
                    message: format!("{} student(s) imported", imported),
                    imported,
                },
            )
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Student import rejected");
            error_response(err.into())
        }
    }
}

/// Handler for GET /api/tutors.
async fn list_tutors_handler(State(state): State<AppState>) -> Response {
    let tutors = state.store().tutors().await;
    json_response(
        StatusCode::OK,
        TutorsResponse {
            success: true,
            message: format!("{} tutor(s) found", tutors.len()),
            tutors,
        },
    )
}

/// Handler for DELETE /api/tutors.
async fn delete_tutors_handler(State(state): State<AppState>) -> Response {
    let deleted = state.store().clear_tutors().await;
    info!(deleted, "Deleted all tutors");
    json_response(
        StatusCode::OK,
        DeleteResponse {
            success: true,
            message: "All tutors have been deleted".to_string(),
            deleted,
        },
    )
}

/// Handler for POST /api/tutors/import.
async fn import_tutors_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tutor import");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(rejection_error(
                rejection,
                &correlation_id,
            )));
        }
    };

    match tutors_from_rows(&request.rows) {
        Ok(tutors) => {
            let imported = state.store().insert_tutors(tutors).await;
            info!(correlation_id = %correlation_id, imported, "Tutors imported");
            json_response(
                StatusCode::OK,
                ImportResponse {
                    success: true,
                    message: format!("{} tutor(s) imported", imported),
                    imported,
                },
            )
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Tutor import rejected");
            error_response(err.into())
        }
    }
}
