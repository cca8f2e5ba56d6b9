//! Interval overlap evaluation for weekly availability windows.

use chrono::Weekday;

use crate::models::{AvailabilitySlot, TimeOfDay};

/// Returns true if two time windows on a given weekday intersect.
///
/// Windows are half-open: two windows that only touch (one ends exactly when
/// the other starts) do not overlap. A window whose start is not strictly
/// before its end overlaps nothing.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use tutor_match::matching::overlaps;
/// use tutor_match::models::TimeOfDay;
///
/// let t = |s: &str| TimeOfDay::parse(s).unwrap();
///
/// assert!(overlaps(Weekday::Mon, t("18:00"), t("20:00"), Weekday::Mon, t("19:00"), t("21:00")));
/// assert!(!overlaps(Weekday::Mon, t("18:00"), t("20:00"), Weekday::Mon, t("20:00"), t("21:00")));
/// assert!(!overlaps(Weekday::Mon, t("18:00"), t("20:00"), Weekday::Tue, t("19:00"), t("21:00")));
/// ```
pub fn overlaps(
    day1: Weekday,
    start1: TimeOfDay,
    end1: TimeOfDay,
    day2: Weekday,
    start2: TimeOfDay,
    end2: TimeOfDay,
) -> bool {
    if start1 >= end1 || start2 >= end2 {
        return false;
    }
    day1 == day2 && start1 < end2 && start2 < end1
}

/// Returns true if two availability slots intersect.
pub fn slots_overlap(a: &AvailabilitySlot, b: &AvailabilitySlot) -> bool {
    overlaps(
        a.day,
        a.start_time,
        a.end_time,
        b.day,
        b.start_time,
        b.end_time,
    )
}
