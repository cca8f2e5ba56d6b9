//! Text normalization for label and weekday comparison.
//!
//! Every comparison between student and tutor data goes through
//! [`normalize`], so case and accent differences never cause a miss.

use chrono::Weekday;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::{EngineError, EngineResult};

/// Returns the canonical comparison form of a label.
///
/// The value is lower-cased, decomposed (NFD) and stripped of combining
/// marks. Applying it twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use tutor_match::matching::normalize;
///
/// assert_eq!(normalize("Mathématiques"), "mathematiques");
/// assert_eq!(normalize("PHYSIQUE-CHIMIE"), "physique-chimie");
/// assert_eq!(normalize(&normalize("Élève")), normalize("Élève"));
/// ```
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Parses a weekday name, accepting French and English names.
///
/// Matching is case and accent insensitive and ignores surrounding
/// whitespace, so `"Lundi"`, `"LUNDI"` and `"monday"` all parse to Monday.
///
/// # Errors
///
/// Returns [`EngineError::InvalidWeekday`] for unknown names.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use tutor_match::matching::parse_weekday;
///
/// assert_eq!(parse_weekday("Mercredi").unwrap(), Weekday::Wed);
/// assert_eq!(parse_weekday("sunday").unwrap(), Weekday::Sun);
/// assert!(parse_weekday("Funday").is_err());
/// ```
pub fn parse_weekday(value: &str) -> EngineResult<Weekday> {
    let day = match normalize(value.trim()).as_str() {
        "lundi" | "monday" => Weekday::Mon,
        "mardi" | "tuesday" => Weekday::Tue,
        "mercredi" | "wednesday" => Weekday::Wed,
        "jeudi" | "thursday" => Weekday::Thu,
        "vendredi" | "friday" => Weekday::Fri,
        "samedi" | "saturday" => Weekday::Sat,
        "dimanche" | "sunday" => Weekday::Sun,
        _ => {
            return Err(EngineError::InvalidWeekday {
                value: value.to_string(),
            });
        }
    };
    Ok(day)
}

/// Returns the French display label used in stored records.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lundi",
        Weekday::Tue => "Mardi",
        Weekday::Wed => "Mercredi",
        Weekday::Thu => "Jeudi",
        Weekday::Fri => "Vendredi",
        Weekday::Sat => "Samedi",
        Weekday::Sun => "Dimanche",
    }
}
