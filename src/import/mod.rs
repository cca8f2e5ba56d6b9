//! Bulk import of students and tutors from spreadsheet rows.
//!
//! The import collaborator turns free-form cells into well-formed records
//! before the matching core ever sees them.

mod availability_text;
mod rows;

pub use availability_text::{SLOT_SEPARATOR, parse_availability_list, parse_slot_text};
pub use rows::{
    AVAILABILITY_HEADER, FULL_NAME_HEADER, LIST_SEPARATOR, STUDENT_HEADERS,
    STUDENT_LEVEL_HEADER, STUDENT_SUBJECTS_HEADER, SheetRow, TUTOR_HEADERS, TUTOR_LEVELS_HEADER,
    TUTOR_SUBJECTS_HEADER, students_from_rows, tutors_from_rows,
};
