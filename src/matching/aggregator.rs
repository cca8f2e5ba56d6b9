//! Ranking of tutors for one student.
//!
//! Each tutor is scored independently; there is no global assignment across
//! students. Results are sorted by composite score with ties kept in input
//! order.

use tracing::debug;

use super::{ScoreWeights, match_availability, match_level, match_subjects};
use crate::error::EngineResult;
use crate::models::{MatchExplanation, MatchResult, ScoreDetails, ScoreStep, Student, Tutor};

/// Ranks tutors for a student using the default weights.
///
/// # Errors
///
/// Fails with [`crate::error::EngineError::InvalidProfile`] if the student
/// or any tutor has a malformed availability slot. A single bad tutor fails
/// the whole ranking; no partial list is returned.
///
/// # Examples
///
/// ```
/// use tutor_match::matching::rank_matches;
/// use tutor_match::models::{AvailabilitySlot, Student, Tutor};
///
/// let student = Student::new(
///     "Léa Martin",
///     vec!["Maths".to_string()],
///     "Terminale",
///     vec![AvailabilitySlot::parse("Lundi", "18:00", "20:00").unwrap()],
/// );
/// let tutor = Tutor::new(
///     "Marc Petit",
///     vec!["maths".to_string()],
///     vec!["terminale".to_string()],
///     vec![AvailabilitySlot::parse("Lundi", "19:00", "21:00").unwrap()],
/// );
///
/// let matches = rank_matches(&student, &[tutor]).unwrap();
/// assert_eq!(matches[0].matching_score, 100);
/// ```
pub fn rank_matches(student: &Student, tutors: &[Tutor]) -> EngineResult<Vec<MatchResult>> {
    rank_matches_with_weights(student, tutors, &ScoreWeights::default())
}

/// Ranks tutors for a student using the given weights.
///
/// An empty tutor slice yields an empty ranking, not an error.
pub fn rank_matches_with_weights(
    student: &Student,
    tutors: &[Tutor],
    weights: &ScoreWeights,
) -> EngineResult<Vec<MatchResult>> {
    student.validate()?;
    for tutor in tutors {
        tutor.validate()?;
    }

    let mut results: Vec<MatchResult> = tutors
        .iter()
        .map(|tutor| score_tutor(student, tutor, weights))
        .collect();

    // sort_by is stable: equal scores keep the input order
    results.sort_by(|a, b| b.matching_score.cmp(&a.matching_score));

    debug!(
        student_id = %student.id,
        tutors = tutors.len(),
        best_score = results.first().map(|r| r.matching_score),
        "Ranked tutors"
    );

    Ok(results)
}

/// Scores a single tutor against a student.
///
/// Does not validate either record; [`rank_matches_with_weights`] does.
pub fn score_tutor(student: &Student, tutor: &Tutor, weights: &ScoreWeights) -> MatchResult {
    let subjects = match_subjects(&student.subjects, &tutor.subjects_taught);
    let level = match_level(&student.level, &tutor.levels);
    let availability = match_availability(&student.availabilities, &tutor.availabilities);

    let details = ScoreDetails {
        subject_score: subjects.score,
        level_score: level.score,
        availability_score: availability.score,
    };
    let matching_score = weights.composite(
        details.subject_score,
        details.level_score,
        details.availability_score,
    );

    let composite_step = ScoreStep {
        rule_id: "composite".to_string(),
        rule_name: "Weighted Composite".to_string(),
        weight: None,
        input: serde_json::json!({
            "subject_score": details.subject_score,
            "level_score": details.level_score,
            "availability_score": details.availability_score
        }),
        output: serde_json::json!({ "matching_score": matching_score }),
        reasoning: format!(
            "round({} x {} + {} x {} + {} x {}) = {}",
            details.subject_score,
            weights.subject().normalize(),
            details.level_score,
            weights.level().normalize(),
            details.availability_score,
            weights.availability().normalize(),
            matching_score
        ),
    };

    let mut subject_step = subjects.step;
    subject_step.weight = Some(weights.subject());
    let mut level_step = level.step;
    level_step.weight = Some(weights.level());
    let mut availability_step = availability.step;
    availability_step.weight = Some(weights.availability());

    MatchResult {
        tutor_id: tutor.id,
        tutor: tutor.summary(),
        matching_score,
        details,
        explanation: MatchExplanation {
            matched_subjects: subjects.matched_subjects,
            matched_level: level.matched_level,
            covered_slots: availability.covered_slots,
            steps: vec![subject_step, level_step, availability_step, composite_step],
        },
    }
}
