use once_cell::sync::Lazy;
use regex::Regex;

use vidomist_core::model::{GradeSheet, IndividualSlip, StudentsSheet};

use crate::ParsingError;

/// Pick the document variant from its title phrase, hyphen/space
/// tolerant, collective roster first. Finding neither marker is the
/// engine's only fatal failure: with no variant there is nothing
/// sensible to extract into.
pub fn classify_sheet(text: &str) -> Result<GradeSheet, ParsingError> {
    static STUDENTS_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)заліково[- ]?екзаменаційна\s*відомість").unwrap());
    static SLIP_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)заліково[- ]?екзаменаційний\s*листок").unwrap());

    if STUDENTS_RE.is_match(text) {
        return Ok(GradeSheet::Students(StudentsSheet::default()));
    }
    if SLIP_RE.is_match(text) {
        return Ok(GradeSheet::Individual(IndividualSlip::default()));
    }
    Err(ParsingError::UnknownDocumentType)
}
