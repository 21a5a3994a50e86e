use once_cell::sync::Lazy;
use regex::Regex;

/// Collapse form-fill artifacts: underscore runs and runs of 2+
/// whitespace characters become a single space. Token boundaries
/// survive; blank fill lines do not.
pub fn normalize_text(text: &str) -> String {
    static FILL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_+|\s{2,}").unwrap());
    FILL_RE.replace_all(text, " ").into_owned()
}

/// Cut the student-roster region out of the raw text.
///
/// The region starts after the "Підпис викладача" column header (matched
/// with arbitrary whitespace between its characters, since the two words
/// land on separate lines in extracted text) and ends at the first `*`
/// after it, the footnote marker printed below the table. Runs on the
/// raw text: collapsing whitespace first would destroy the line
/// boundaries the row extractor needs.
///
/// A missing start marker yields an empty region; roster extraction then
/// produces zero rows and the validator reports the count mismatches.
pub fn locate_roster_region(text: &str) -> String {
    static START_RE: Lazy<Regex> = Lazy::new(|| {
        let spaced = "Підписвикладача"
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(r"\s*");
        Regex::new(&format!("(?i){spaced}")).unwrap()
    });

    let Some(marker) = START_RE.find(text) else {
        return String::new();
    };
    let rest = &text[marker.end()..];
    let end = rest.find('*').unwrap_or(rest.len());
    rest[..end].trim().to_string()
}
