//! Percentage helper shared by the coverage scores.

/// Returns `matched / total` as a percentage rounded half up, or 0 when
/// `total` is zero.
///
/// # Examples
///
/// ```
/// use tutor_match::matching::coverage_percentage;
///
/// assert_eq!(coverage_percentage(1, 2), 50);
/// assert_eq!(coverage_percentage(2, 3), 67);
/// assert_eq!(coverage_percentage(1, 8), 13);
/// assert_eq!(coverage_percentage(0, 0), 0);
/// ```
pub fn coverage_percentage(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let matched = matched.min(total);
    ((200 * matched + total) / (2 * total)) as u8
}
