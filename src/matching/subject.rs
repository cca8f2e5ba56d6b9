//! Subject coverage scoring.
//!
//! Scores how much of a student's requested subject list a tutor teaches.

use super::{LabelSet, coverage_percentage};
use crate::models::ScoreStep;

/// The result of matching a student's subjects against a tutor's.
#[derive(Debug, Clone)]
pub struct SubjectMatchResult {
    /// Coverage score in `0..=100`.
    pub score: u8,
    /// Student subjects found in the tutor's list, as the student wrote them.
    pub matched_subjects: Vec<String>,
    /// The step recording this decision.
    pub step: ScoreStep,
}

/// Returns the subject coverage score.
///
/// See [`match_subjects`] for the rules.
///
/// # Examples
///
/// ```
/// use tutor_match::matching::subject_score;
///
/// let requested = vec!["Maths".to_string(), "Physique".to_string()];
/// let taught = vec!["maths".to_string(), "chimie".to_string()];
/// assert_eq!(subject_score(&requested, &taught), 50);
/// ```
pub fn subject_score(student_subjects: &[String], tutor_subjects: &[String]) -> u8 {
    match_subjects(student_subjects, tutor_subjects).score
}

/// Matches a student's requested subjects against a tutor's taught subjects.
///
/// The score is 0 when either list is empty. Otherwise it is the share of
/// student entries whose normalized form the tutor teaches, as a percentage
/// rounded half up. A subject the student lists twice counts twice, in the
/// numerator and the denominator alike.
pub fn match_subjects(student_subjects: &[String], tutor_subjects: &[String]) -> SubjectMatchResult {
    let taught = LabelSet::new(tutor_subjects);

    let matched_subjects: Vec<String> = if taught.is_empty() {
        Vec::new()
    } else {
        student_subjects
            .iter()
            .filter(|subject| taught.contains(subject))
            .cloned()
            .collect()
    };

    let score = coverage_percentage(matched_subjects.len(), student_subjects.len());

    let reasoning = if student_subjects.is_empty() {
        "Student requested no subjects".to_string()
    } else if taught.is_empty() {
        "Tutor lists no subjects".to_string()
    } else {
        format!(
            "{} of {} requested subjects taught = {}%",
            matched_subjects.len(),
            student_subjects.len(),
            score
        )
    };

    let step = ScoreStep {
        rule_id: "subject_coverage".to_string(),
        rule_name: "Subject Coverage".to_string(),
        weight: None,
        input: serde_json::json!({
            "student_subjects": student_subjects,
            "tutor_subjects": tutor_subjects
        }),
        output: serde_json::json!({
            "matched_subjects": matched_subjects,
            "score": score
        }),
        reasoning,
    };

    SubjectMatchResult {
        score,
        matched_subjects,
        step,
    }
}
