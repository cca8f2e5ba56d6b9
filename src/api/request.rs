//! Request types for the Tutor Match Engine API.

use serde::{Deserialize, Serialize};

use crate::import::SheetRow;

/// Request body for the `/students/import` and `/tutors/import` endpoints.
///
/// `rows` is the first sheet of the workbook, one object per row keyed by
/// column header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// The sheet rows.
    pub rows: Vec<SheetRow>,
}
