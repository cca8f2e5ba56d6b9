//! Match result models.
//!
//! A [`MatchResult`] carries the composite score for one tutor, the three
//! sub-scores it was built from, and an [`MatchExplanation`] recording which
//! subjects, level and slots produced them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AvailabilitySlot, TutorSummary};

/// The three sub-scores behind a composite score, each in `0..=100`.
///
/// # Example
///
/// ```
/// use tutor_match::models::ScoreDetails;
///
/// let details = ScoreDetails {
///     subject_score: 50,
///     level_score: 100,
///     availability_score: 0,
/// };
/// assert_eq!(details.subject_score, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    /// Share of the student's subjects the tutor teaches.
    pub subject_score: u8,
    /// 100 when the tutor teaches the student's level, else 0.
    pub level_score: u8,
    /// Share of the student's slots overlapping a tutor slot.
    pub availability_score: u8,
}

/// One scoring decision, recorded for explainability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreStep {
    /// Machine identifier of the rule (e.g. `subject_coverage`).
    pub rule_id: String,
    /// Human-readable name of the rule.
    pub rule_name: String,
    /// Weight of this rule in the composite, if it contributes directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Why a tutor received its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchExplanation {
    /// Student subjects the tutor teaches, as the student wrote them.
    pub matched_subjects: Vec<String>,
    /// The tutor level label matching the student's level.
    pub matched_level: Option<String>,
    /// Student slots that overlap at least one tutor slot.
    pub covered_slots: Vec<AvailabilitySlot>,
    /// The scoring steps, in evaluation order.
    pub steps: Vec<ScoreStep>,
}

/// The ranked outcome for one tutor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// The tutor's ID.
    pub tutor_id: Uuid,
    /// Public tutor fields.
    pub tutor: TutorSummary,
    /// Weighted composite score in `0..=100`.
    pub matching_score: u8,
    /// The sub-scores behind `matching_score`.
    pub details: ScoreDetails,
    /// Which inputs produced the sub-scores.
    pub explanation: MatchExplanation,
}
