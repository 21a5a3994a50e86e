use once_cell::sync::Lazy;
use regex::Regex;

use vidomist_core::model::StudentsSheet;

/// Pull the three document-stated attendance counts from their fixed
/// anchor phrases. The comparison against the roster-derived tallies
/// lives in the validator; a missing anchor simply leaves the stated
/// count empty, which that comparison then reports.
pub fn extract_stated_counts(text: &str, sheet: &mut StudentsSheet) {
    static PRESENT_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)кількість студентів на екзамені\s*/тезі\s*/заліку\s*(\d+)").unwrap()
    });
    static MISSING_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)кількість студентів, які не з[’']явились на екзамен\s*/тезу\s*/залік\s*(\d+)")
            .unwrap()
    });
    static BANNED_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)кількість студентів, недопущених до екзамену\s*/тези\s*/заліку\s*(\d+)")
            .unwrap()
    });

    sheet.present = PRESENT_RE.captures(text).and_then(|caps| caps[1].parse().ok());
    sheet.missing = MISSING_RE.captures(text).and_then(|caps| caps[1].parse().ok());
    sheet.banned = BANNED_RE.captures(text).and_then(|caps| caps[1].parse().ok());
}
