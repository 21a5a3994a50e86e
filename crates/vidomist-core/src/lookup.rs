use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Control form of a pass/fail course.
pub const PASS_FAIL: &str = "залік";
/// Control form of a graded exam course.
pub const EXAM: &str = "екзамен";

/// Canonical label for a student who did not show up.
pub const ABSENT: &str = "не відвідував";
/// Canonical label for a student barred from the assessment.
pub const BARRED: &str = "не допущений";

/// Ukrainian month names in the genitive case, the form they take in a
/// written-out date ("17 червня 2021").
pub static MONTHS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("січня", 1),
        ("лютого", 2),
        ("березня", 3),
        ("квітня", 4),
        ("травня", 5),
        ("червня", 6),
        ("липня", 7),
        ("серпня", 8),
        ("вересня", 9),
        ("жовтня", 10),
        ("листопада", 11),
        ("грудня", 12),
    ])
});

/// Valid national-grade vocabulary per control form.
pub static NATIONAL_GRADES: Lazy<HashMap<&'static str, HashSet<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (
            PASS_FAIL,
            HashSet::from(["зараховано", "не зараховано", ABSENT, BARRED]),
        ),
        (
            EXAM,
            HashSet::from([
                "відмінно",
                "добре",
                "задовільно",
                "незадовільно",
                ABSENT,
                BARRED,
            ]),
        ),
    ])
});

/// Whitespace-stripped, lowercased grade phrases mapped onto one
/// canonical label per category. Grammatical-gender variants of the
/// attendance labels collapse onto the masculine form used everywhere
/// else in the engine.
static CANONICAL_GRADES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("зараховано", "зараховано"),
        ("незараховано", "не зараховано"),
        ("невідвідував", ABSENT),
        ("невідвідувала", ABSENT),
        ("недопущений", BARRED),
        ("недопущена", BARRED),
        ("відмінно", "відмінно"),
        ("добре", "добре"),
        ("задовільно", "задовільно"),
        ("незадовільно", "незадовільно"),
    ])
});

/// Canonicalize a raw national-grade phrase: internal whitespace is
/// stripped and the result case-folded before the table lookup. `None`
/// when the phrase is not in the vocabulary at all.
pub fn canonical_national_grade(raw: &str) -> Option<&'static str> {
    let key: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    CANONICAL_GRADES.get(key.as_str()).copied()
}

/// ECTS letter buckets over the 100-point sum. The boundaries are closed
/// exactly as printed on the form: 90 itself is not an A and 59 is not
/// an E. `None` for a letter outside A-F.
pub fn ects_bucket_matches(grade: char, sum: i64) -> Option<bool> {
    let ok = match grade.to_ascii_uppercase() {
        'A' => sum > 90,
        'B' => (81..=90).contains(&sum),
        'C' => (71..=80).contains(&sum),
        'D' => (66..=70).contains(&sum),
        'E' => (60..=65).contains(&sum),
        'F' => sum < 60,
        _ => return None,
    };
    Some(ok)
}

/// Explicit rune-range check for a Cyrillic letter (U+0400..=U+04FF).
/// Used instead of a regex script class so the definition does not
/// depend on engine-specific Unicode support.
pub fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}
