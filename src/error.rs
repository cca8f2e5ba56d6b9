//! Error types for the Tutor Match Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating records,
//! loading configuration, importing rows and ranking tutors.

use thiserror::Error;

/// The main error type for the Tutor Match Engine.
///
/// Scoring itself never fails on empty-but-well-formed input; errors are
/// reserved for structural problems (unparsable times, inverted slots) and
/// for the collaborators around the core (config, import, lookups).
///
/// # Example
///
/// ```
/// use tutor_match::error::EngineError;
///
/// let error = EngineError::InvalidTime {
///     value: "25:00".to_string(),
///     message: "hour must be between 00 and 23".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time '25:00': hour must be between 00 and 23");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// The configured score weights are out of range or do not sum to one.
    #[error("Invalid score weights: {message}")]
    InvalidWeights {
        /// A description of what is wrong with the weights.
        message: String,
    },

    /// A time-of-day string was not in `HH:MM` form.
    #[error("Invalid time '{value}': {message}")]
    InvalidTime {
        /// The offending input.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A weekday name was not recognised.
    #[error("Invalid weekday '{value}'")]
    InvalidWeekday {
        /// The offending input.
        value: String,
    },

    /// An availability slot has equal or inverted bounds.
    #[error("Invalid availability slot '{slot}': start must be before end")]
    InvalidSlot {
        /// The slot rendered as `<day> HH:MM-HH:MM`.
        slot: String,
    },

    /// A student or tutor record was structurally invalid.
    #[error("Invalid profile '{id}', field '{field}': {message}")]
    InvalidProfile {
        /// The ID of the invalid record.
        id: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No student exists with the requested ID.
    #[error("Student not found: {id}")]
    StudentNotFound {
        /// The student ID that was looked up.
        id: String,
    },

    /// The tutor collection is empty.
    #[error("No tutors available")]
    NoTutorsAvailable,

    /// A bulk import payload was rejected.
    #[error("Import failed: {message}")]
    ImportError {
        /// A description of why the import was rejected.
        message: String,
    },

    /// The seed data file could not be read or parsed.
    #[error("Failed to load seed data '{path}': {message}")]
    SeedDataError {
        /// The path to the seed file.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
