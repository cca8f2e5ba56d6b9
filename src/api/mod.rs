//! HTTP API module for the Tutor Match Engine.
//!
//! This module provides the REST endpoints for ranking tutors for a
//! student and for managing the stored student and tutor records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ImportRequest;
pub use response::{
    ApiError, ApiErrorResponse, DeleteResponse, HealthResponse, ImportResponse, MatchingResponse,
    StudentsResponse, TutorsResponse,
};
pub use state::AppState;
