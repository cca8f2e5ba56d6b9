//! School level compatibility scoring.

use super::LabelSet;
use crate::models::ScoreStep;

/// Score given when the tutor teaches the student's level.
pub const LEVEL_MATCH_SCORE: u8 = 100;

/// The result of matching a student's level against a tutor's levels.
#[derive(Debug, Clone)]
pub struct LevelMatchResult {
    /// Either 0 or [`LEVEL_MATCH_SCORE`].
    pub score: u8,
    /// The tutor label that matched, as the tutor wrote it.
    pub matched_level: Option<String>,
    /// The step recording this decision.
    pub step: ScoreStep,
}

/// Returns 100 if the tutor teaches the student's level, 0 otherwise.
///
/// # Examples
///
/// ```
/// use tutor_match::matching::level_score;
///
/// let taught = vec!["terminale".to_string(), "1ere".to_string()];
/// assert_eq!(level_score("Terminale", &taught), 100);
/// assert_eq!(level_score("3eme", &taught), 0);
/// ```
pub fn level_score(student_level: &str, tutor_levels: &[String]) -> u8 {
    match_level(student_level, tutor_levels).score
}

/// Matches a student's level against a tutor's taught levels.
///
/// A blank student level or an empty tutor list scores 0.
pub fn match_level(student_level: &str, tutor_levels: &[String]) -> LevelMatchResult {
    let taught = LabelSet::new(tutor_levels);

    let matched_level = if student_level.trim().is_empty() {
        None
    } else {
        taught
            .position(student_level)
            .map(|index| tutor_levels[index].clone())
    };

    let score = if matched_level.is_some() {
        LEVEL_MATCH_SCORE
    } else {
        0
    };

    let reasoning = match &matched_level {
        Some(level) => format!("Tutor teaches level '{}'", level),
        None if student_level.trim().is_empty() => "Student level is not set".to_string(),
        None => format!("Tutor does not teach level '{}'", student_level),
    };

    let step = ScoreStep {
        rule_id: "level_match".to_string(),
        rule_name: "Level Match".to_string(),
        weight: None,
        input: serde_json::json!({
            "student_level": student_level,
            "tutor_levels": tutor_levels
        }),
        output: serde_json::json!({
            "matched_level": matched_level,
            "score": score
        }),
        reasoning,
    };

    LevelMatchResult {
        score,
        matched_level,
        step,
    }
}
