//! Seed data loading.
//!
//! A seed file is a JSON document `{ "students": [...], "tutors": [...] }`
//! using the same record shape as the HTTP API.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::ProfileStore;
use crate::error::{EngineError, EngineResult};
use crate::models::{Student, Tutor};

/// Students and tutors read from a seed file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    /// Seed students.
    #[serde(default)]
    pub students: Vec<Student>,
    /// Seed tutors.
    #[serde(default)]
    pub tutors: Vec<Tutor>,
}

impl SeedData {
    /// Reads and validates a seed file.
    ///
    /// # Errors
    ///
    /// Returns `SeedDataError` if the file cannot be read, is not valid
    /// JSON, or holds a record that is missing a required field or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| EngineError::SeedDataError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        Self::from_json(&content, &path_str)
    }

    /// Parses and validates seed data from JSON text.
    pub fn from_json(content: &str, origin: &str) -> EngineResult<Self> {
        let seed: SeedData =
            serde_json::from_str(content).map_err(|e| EngineError::SeedDataError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        let invalid = seed
            .students
            .iter()
            .map(Student::validate)
            .chain(seed.tutors.iter().map(Tutor::validate))
            .find_map(Result::err);
        if let Some(err) = invalid {
            return Err(EngineError::SeedDataError {
                path: origin.to_string(),
                message: err.to_string(),
            });
        }

        Ok(seed)
    }

    /// Moves the records into a new store.
    pub fn into_store(self) -> ProfileStore {
        ProfileStore::with_records(self.students, self.tutors)
    }
}
