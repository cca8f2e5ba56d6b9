//! Student and tutor profile models.
//!
//! Profiles are owned by the record store and handed read-only to the
//! matching engine at request time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AvailabilitySlot;
use crate::error::{EngineError, EngineResult};

/// A student looking for a tutor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Unique identifier for the student.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// The student's full name.
    pub full_name: String,
    /// Requested subjects, free text, in the order given.
    pub subjects: Vec<String>,
    /// School level, free text (e.g. "Terminale").
    pub level: String,
    /// Weekly availability windows.
    #[serde(default)]
    pub availabilities: Vec<AvailabilitySlot>,
    /// When the record was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Creates a student with a fresh ID and creation timestamp.
    pub fn new(
        full_name: impl Into<String>,
        subjects: Vec<String>,
        level: impl Into<String>,
        availabilities: Vec<AvailabilitySlot>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: full_name.into(),
            subjects,
            level: level.into(),
            availabilities,
            created_at: Utc::now(),
        }
    }

    /// Checks the structural invariants of the record.
    ///
    /// Empty subject, level or availability fields are valid; they score
    /// zero. Only malformed availability bounds are rejected.
    pub fn validate(&self) -> EngineResult<()> {
        validate_slots(&self.id, &self.availabilities)
    }

    /// Returns the public summary echoed back in matching responses.
    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            id: self.id,
            full_name: self.full_name.clone(),
            subjects: self.subjects.clone(),
            level: self.level.clone(),
        }
    }
}

/// A tutor offering lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    /// Unique identifier for the tutor.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// The tutor's full name.
    pub full_name: String,
    /// Subjects taught, free text. At least one is required.
    pub subjects_taught: Vec<String>,
    /// School levels taught, free text. At least one is required.
    pub levels: Vec<String>,
    /// Weekly availability windows.
    #[serde(default)]
    pub availabilities: Vec<AvailabilitySlot>,
    /// When the record was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Tutor {
    /// Creates a tutor with a fresh ID and creation timestamp.
    pub fn new(
        full_name: impl Into<String>,
        subjects_taught: Vec<String>,
        levels: Vec<String>,
        availabilities: Vec<AvailabilitySlot>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: full_name.into(),
            subjects_taught,
            levels,
            availabilities,
            created_at: Utc::now(),
        }
    }

    /// Checks the structural invariants of the record.
    ///
    /// A tutor must teach at least one subject and one level; blank labels
    /// do not count.
    pub fn validate(&self) -> EngineResult<()> {
        require_label(&self.id, "subjectsTaught", &self.subjects_taught)?;
        require_label(&self.id, "levels", &self.levels)?;
        validate_slots(&self.id, &self.availabilities)
    }

    /// Returns the summary embedded in each match result.
    pub fn summary(&self) -> TutorSummary {
        TutorSummary {
            id: self.id,
            full_name: self.full_name.clone(),
            subjects_taught: self.subjects_taught.clone(),
            levels: self.levels.clone(),
        }
    }
}

fn require_label(id: &Uuid, field: &str, labels: &[String]) -> EngineResult<()> {
    if labels.iter().any(|label| !label.trim().is_empty()) {
        Ok(())
    } else {
        Err(EngineError::InvalidProfile {
            id: id.to_string(),
            field: field.to_string(),
            message: "at least one entry is required".to_string(),
        })
    }
}

fn validate_slots(id: &Uuid, slots: &[AvailabilitySlot]) -> EngineResult<()> {
    for (index, slot) in slots.iter().enumerate() {
        if !slot.is_well_formed() {
            return Err(EngineError::InvalidProfile {
                id: id.to_string(),
                field: format!("availabilities[{}]", index),
                message: format!("slot {} must start before it ends", slot),
            });
        }
    }
    Ok(())
}

/// The student fields returned alongside a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    /// Unique identifier for the student.
    pub id: Uuid,
    /// The student's full name.
    pub full_name: String,
    /// Requested subjects.
    pub subjects: Vec<String>,
    /// School level.
    pub level: String,
}

/// The tutor fields returned in a match result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorSummary {
    /// Unique identifier for the tutor.
    pub id: Uuid,
    /// The tutor's full name.
    pub full_name: String,
    /// Subjects taught.
    pub subjects_taught: Vec<String>,
    /// Levels taught.
    pub levels: Vec<String>,
}
