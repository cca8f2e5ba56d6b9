//! Core data models for the Tutor Match Engine.
//!
//! This module contains the profiles, availability slots and match results
//! used throughout the engine.

mod match_result;
mod profile;
mod slot;

pub use match_result::{MatchExplanation, MatchResult, ScoreDetails, ScoreStep};
pub use profile::{Student, StudentSummary, Tutor, TutorSummary};
pub use slot::{AvailabilitySlot, MINUTES_PER_DAY, TimeOfDay};
