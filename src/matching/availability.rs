//! Availability coverage scoring.
//!
//! Each student slot is checked independently against every tutor slot; a
//! single tutor slot may cover several student slots.

use super::{coverage_percentage, slots_overlap};
use crate::models::{AvailabilitySlot, ScoreStep};

/// The result of matching a student's availability against a tutor's.
#[derive(Debug, Clone)]
pub struct AvailabilityMatchResult {
    /// Coverage score in `0..=100`.
    pub score: u8,
    /// Student slots overlapping at least one tutor slot, in student order.
    pub covered_slots: Vec<AvailabilitySlot>,
    /// The step recording this decision.
    pub step: ScoreStep,
}

/// Returns the availability coverage score.
///
/// # Examples
///
/// ```
/// use tutor_match::matching::availability_score;
/// use tutor_match::models::AvailabilitySlot;
///
/// let student = vec![
///     AvailabilitySlot::parse("Lundi", "18:00", "20:00").unwrap(),
///     AvailabilitySlot::parse("Mardi", "18:00", "20:00").unwrap(),
/// ];
/// let tutor = vec![AvailabilitySlot::parse("Lundi", "19:00", "21:00").unwrap()];
/// assert_eq!(availability_score(&student, &tutor), 50);
/// ```
pub fn availability_score(student_slots: &[AvailabilitySlot], tutor_slots: &[AvailabilitySlot]) -> u8 {
    match_availability(student_slots, tutor_slots).score
}

/// Matches a student's weekly slots against a tutor's.
///
/// The score is 0 when either list is empty, otherwise the share of student
/// slots overlapping any tutor slot, as a percentage rounded half up.
pub fn match_availability(
    student_slots: &[AvailabilitySlot],
    tutor_slots: &[AvailabilitySlot],
) -> AvailabilityMatchResult {
    let covered_slots: Vec<AvailabilitySlot> = student_slots
        .iter()
        .filter(|student_slot| {
            tutor_slots
                .iter()
                .any(|tutor_slot| slots_overlap(student_slot, tutor_slot))
        })
        .copied()
        .collect();

    let score = coverage_percentage(covered_slots.len(), student_slots.len());

    let reasoning = if student_slots.is_empty() {
        "Student gave no availability".to_string()
    } else if tutor_slots.is_empty() {
        "Tutor gave no availability".to_string()
    } else {
        format!(
            "{} of {} student slots overlap a tutor slot = {}%",
            covered_slots.len(),
            student_slots.len(),
            score
        )
    };

    let render = |slots: &[AvailabilitySlot]| -> Vec<String> {
        slots.iter().map(ToString::to_string).collect()
    };

    let step = ScoreStep {
        rule_id: "availability_coverage".to_string(),
        rule_name: "Availability Coverage".to_string(),
        weight: None,
        input: serde_json::json!({
            "student_slots": render(student_slots),
            "tutor_slots": render(tutor_slots)
        }),
        output: serde_json::json!({
            "covered_slots": render(&covered_slots),
            "score": score
        }),
        reasoning,
    };

    AvailabilityMatchResult {
        score,
        covered_slots,
        step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: &str, start: &str, end: &str) -> AvailabilitySlot {
        AvailabilitySlot::parse(day, start, end).unwrap()
    }

    #[test]
    fn test_single_overlapping_slot() {
        let result = match_availability(
            &[slot("Lundi", "18:00", "20:00")],
            &[slot("Lundi", "19:00", "21:00")],
        );
        assert_eq!(result.score, 100);
        assert_eq!(result.covered_slots.len(), 1);
    }

    #[test]
    fn test_touching_slot_does_not_count() {
        let result = match_availability(
            &[slot("Lundi", "18:00", "20:00")],
            &[slot("Lundi", "20:00", "21:00")],
        );
        assert_eq!(result.score, 0);
        assert_eq!(
            result.step.reasoning,
            "0 of 1 student slots overlap a tutor slot = 0%"
        );
    }

    #[test]
    fn test_one_tutor_slot_covers_many_student_slots() {
        let student = [
            slot("Samedi", "09:00", "10:00"),
            slot("Samedi", "10:30", "11:30"),
            slot("Samedi", "14:00", "15:00"),
        ];
        let tutor = [slot("Samedi", "08:00", "12:00")];
        let result = match_availability(&student, &tutor);
        assert_eq!(result.score, 67);
        assert_eq!(result.covered_slots, student[..2].to_vec());
    }

    #[test]
    fn test_empty_student_slots_score_zero() {
        let result = match_availability(&[], &[slot("Lundi", "18:00", "20:00")]);
        assert_eq!(result.score, 0);
        assert_eq!(result.step.reasoning, "Student gave no availability");
    }

    #[test]
    fn test_empty_tutor_slots_score_zero() {
        assert_eq!(availability_score(&[slot("Lundi", "18:00", "20:00")], &[]), 0);
    }

    #[test]
    fn test_step_renders_slots() {
        let result = match_availability(
            &[slot("Mardi", "17:00", "18:00")],
            &[slot("mardi", "17:30", "19:00")],
        );
        assert_eq!(result.step.input["student_slots"][0], "Mardi 17:00-18:00");
        assert_eq!(result.step.output["covered_slots"][0], "Mardi 17:00-18:00");
    }
}
