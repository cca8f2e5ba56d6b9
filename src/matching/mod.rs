//! Matching logic for the Tutor Match Engine.
//!
//! This module contains the scoring pipeline: text normalization, interval
//! overlap evaluation, the subject, level and availability matchers, the
//! composite weights, and the aggregator that ranks tutors for a student.
//! Everything here is pure and performs no I/O.

mod aggregator;
mod availability;
mod coverage;
mod labels;
mod level;
mod normalize;
mod overlap;
mod subject;
mod weights;

pub use aggregator::{rank_matches, rank_matches_with_weights, score_tutor};
pub use availability::{AvailabilityMatchResult, availability_score, match_availability};
pub use coverage::coverage_percentage;
pub use labels::LabelSet;
pub use level::{LEVEL_MATCH_SCORE, LevelMatchResult, level_score, match_level};
pub use normalize::{normalize, parse_weekday, weekday_label};
pub use overlap::{overlaps, slots_overlap};
pub use subject::{SubjectMatchResult, match_subjects, subject_score};
pub use weights::{
    DEFAULT_AVAILABILITY_WEIGHT_PCT, DEFAULT_LEVEL_WEIGHT_PCT, DEFAULT_SUBJECT_WEIGHT_PCT,
    ScoreWeights,
};
