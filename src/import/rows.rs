//! Conversion of spreadsheet rows into student and tutor records.
//!
//! Rows are the first sheet of an uploaded workbook, one JSON object per
//! row keyed by column header. Import is all-or-nothing: any rejected row
//! rejects the whole batch.

use serde_json::Value;

use super::parse_availability_list;
use crate::error::{EngineError, EngineResult};
use crate::models::{Student, Tutor};

/// One spreadsheet row, keyed by column header.
pub type SheetRow = serde_json::Map<String, Value>;

/// Full name column, shared by both sheets.
pub const FULL_NAME_HEADER: &str = "Nom complet";
/// Availability column, shared by both sheets.
pub const AVAILABILITY_HEADER: &str = "Disponibilités";
/// Requested subjects column of the student sheet.
pub const STUDENT_SUBJECTS_HEADER: &str = "Matière(s) demandée(s)";
/// School level column of the student sheet.
pub const STUDENT_LEVEL_HEADER: &str = "Niveau scolaire";
/// Taught subjects column of the tutor sheet.
pub const TUTOR_SUBJECTS_HEADER: &str = "Matière(s) enseignée(s)";
/// Taught levels column of the tutor sheet.
pub const TUTOR_LEVELS_HEADER: &str = "Niveaux enseignés";

/// Columns a student sheet must have.
pub const STUDENT_HEADERS: [&str; 4] = [
    FULL_NAME_HEADER,
    STUDENT_SUBJECTS_HEADER,
    STUDENT_LEVEL_HEADER,
    AVAILABILITY_HEADER,
];

/// Columns a tutor sheet must have.
pub const TUTOR_HEADERS: [&str; 4] = [
    FULL_NAME_HEADER,
    TUTOR_SUBJECTS_HEADER,
    TUTOR_LEVELS_HEADER,
    AVAILABILITY_HEADER,
];

/// Separator between entries of a subject or level cell.
pub const LIST_SEPARATOR: char = ',';

/// Builds students from sheet rows.
///
/// # Errors
///
/// Returns `ImportError` if there are no rows, the first row lacks a
/// required column, or a row has an empty full name.
pub fn students_from_rows(rows: &[SheetRow]) -> EngineResult<Vec<Student>> {
    check_sheet(rows, &STUDENT_HEADERS)?;

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let full_name = required_name(row, index)?;
            Ok(Student::new(
                full_name,
                split_list(cell_text(row, STUDENT_SUBJECTS_HEADER).as_deref()),
                cell_text(row, STUDENT_LEVEL_HEADER).unwrap_or_default(),
                parse_availability_list(&cell_text(row, AVAILABILITY_HEADER).unwrap_or_default()),
            ))
        })
        .collect()
}

/// Builds tutors from sheet rows.
///
/// # Errors
///
/// As [`students_from_rows`], and additionally when a row lists no subject
/// or no level.
pub fn tutors_from_rows(rows: &[SheetRow]) -> EngineResult<Vec<Tutor>> {
    check_sheet(rows, &TUTOR_HEADERS)?;

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let full_name = required_name(row, index)?;
            let subjects_taught = split_list(cell_text(row, TUTOR_SUBJECTS_HEADER).as_deref());
            if subjects_taught.is_empty() {
                return Err(row_error(index, "at least one subject is required"));
            }
            let levels = split_list(cell_text(row, TUTOR_LEVELS_HEADER).as_deref());
            if levels.is_empty() {
                return Err(row_error(index, "at least one level is required"));
            }
            Ok(Tutor::new(
                full_name,
                subjects_taught,
                levels,
                parse_availability_list(&cell_text(row, AVAILABILITY_HEADER).unwrap_or_default()),
            ))
        })
        .collect()
}

fn check_sheet(rows: &[SheetRow], expected: &[&str]) -> EngineResult<()> {
    let Some(first) = rows.first() else {
        return Err(EngineError::ImportError {
            message: "the sheet is empty".to_string(),
        });
    };

    let missing: Vec<&str> = expected
        .iter()
        .copied()
        .filter(|header| !first.contains_key(*header))
        .collect();
    if !missing.is_empty() {
        return Err(EngineError::ImportError {
            message: format!("missing columns: {}", missing.join(", ")),
        });
    }
    Ok(())
}

fn required_name(row: &SheetRow, index: usize) -> EngineResult<String> {
    cell_text(row, FULL_NAME_HEADER)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| row_error(index, &format!("'{}' is empty", FULL_NAME_HEADER)))
}

fn row_error(index: usize, message: &str) -> EngineError {
    EngineError::ImportError {
        message: format!("row {}: {}", index + 1, message),
    }
}

/// Returns the trimmed text of a cell; numbers and booleans are rendered.
fn cell_text(row: &SheetRow, header: &str) -> Option<String> {
    match row.get(header)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn split_list(cell: Option<&str>) -> Vec<String> {
    cell.map(|text| {
        text.split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
