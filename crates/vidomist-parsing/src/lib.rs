use thiserror::Error;
use tracing::debug;

use vidomist_core::model::GradeSheet;
use vidomist_core::validate::validate_sheet;

pub mod classify;
pub mod counts;
pub mod fields;
pub mod normalize;
pub mod roster;

pub use classify::classify_sheet;
pub use normalize::{locate_roster_region, normalize_text};

#[derive(Error, Debug)]
pub enum ParsingError {
    /// Neither document-type marker phrase was found. With no variant
    /// there is nothing to extract into, so no document is produced.
    #[error("Не вдалося визначити тип заліково-екзаменаційного документу.")]
    UnknownDocumentType,
}

/// Run the full extraction pipeline over producer-supplied text.
///
/// 1. Locate the roster region in the raw text
/// 2. Collapse fill underscores and run-on whitespace
/// 3. Classify the document variant (the only fatal step)
/// 4. Run every field extractor; misses are recorded per field
/// 5. Extract roster rows line by line
/// 6. Apply the cross-field validator
///
/// The returned document always carries every field, every error slot
/// and the aggregate `is_valid` flag; an invalid document is returned in
/// full, never withheld.
pub fn parse_sheet(raw_text: &str, file_name: Option<&str>) -> Result<GradeSheet, ParsingError> {
    let roster_text = normalize::locate_roster_region(raw_text);
    let text = normalize::normalize_text(raw_text);

    let mut sheet = classify::classify_sheet(&text)?;
    sheet.base_mut().file_name = file_name.map(str::to_string);

    fields::extract_fields(&text, &mut sheet);
    sheet.base_mut().roster = roster::extract_roster(&roster_text);
    if let GradeSheet::Students(students) = &mut sheet {
        counts::extract_stated_counts(&text, students);
    }

    validate_sheet(&mut sheet);
    debug!(
        valid = sheet.is_valid(),
        rows = sheet.base().roster.len(),
        "sheet parsed"
    );
    Ok(sheet)
}
