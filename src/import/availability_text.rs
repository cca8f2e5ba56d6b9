//! Parsing of spreadsheet availability cells.
//!
//! A cell holds `;`-separated slots written `"<Jour> de HH:MM à HH:MM"`,
//! e.g. `"Lundi de 18:00 à 20:00; Samedi de 10:00 à 12:00"`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::AvailabilitySlot;

/// Separator between slots in an availability cell.
pub const SLOT_SEPARATOR: char = ';';

static SLOT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(lundi|mardi|mercredi|jeudi|vendredi|samedi|dimanche)\s+de\s+(\d{2}:\d{2})\s+[aà]\s+(\d{2}:\d{2})",
    )
    .expect("slot pattern is valid")
});

/// Parses one slot such as `"Lundi de 18:00 à 20:00"`.
///
/// The pattern may appear anywhere in the text, with any case; text around
/// it is ignored.
///
/// # Errors
///
/// Returns `ImportError` if no slot pattern is found, `InvalidTime` for an
/// impossible time and `InvalidSlot` when the end is not after the start.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use tutor_match::import::parse_slot_text;
///
/// let slot = parse_slot_text("mardi de 17:30 à 19:00").unwrap();
/// assert_eq!(slot.day, Weekday::Tue);
/// assert_eq!(slot.to_string(), "Mardi 17:30-19:00");
/// assert!(parse_slot_text("le soir").is_err());
/// ```
pub fn parse_slot_text(text: &str) -> EngineResult<AvailabilitySlot> {
    let Some(captures) = SLOT_RE.captures(text) else {
        return Err(EngineError::ImportError {
            message: format!("unrecognised availability '{}'", text),
        });
    };

    AvailabilitySlot::parse(&captures[1], &captures[2], &captures[3])
}

/// Parses a whole availability cell, dropping slots that fail to parse.
///
/// Dropped slots are logged at `warn` level.
pub fn parse_availability_list(text: &str) -> Vec<AvailabilitySlot> {
    text.split(SLOT_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| match parse_slot_text(part) {
            Ok(slot) => Some(slot),
            Err(err) => {
                warn!(slot = part, error = %err, "Dropping unparsable availability slot");
                None
            }
        })
        .collect()
}
