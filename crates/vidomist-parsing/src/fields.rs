//! Field extraction pipeline over the normalized full text.
//!
//! Each extractor is an independent unit: one anchored pattern match that
//! populates one field group or records that group's fixed error message.
//! A miss never halts the pipeline; every remaining extractor still runs.
//! Cyrillic letters are matched with the explicit rune range `[Ѐ-ӿ]`
//! (U+0400..U+04FF) rather than a script class.

use once_cell::sync::Lazy;
use regex::Regex;

use vidomist_core::model::{GradeSheet, IndividualSlip, PartialDate, SheetBase};

/// Run every common field extractor, then the variant-specific ones.
pub fn extract_fields(text: &str, sheet: &mut GradeSheet) {
    let base = sheet.base_mut();
    extract_sheet_code(text, base);
    extract_okr(text, base);
    extract_faculty(text, base);
    extract_edu_year(text, base);
    extract_group(text, base);
    extract_subject(text, base);
    extract_term(text, base);
    extract_credit_points(text, base);
    extract_control_form(text, base);
    extract_evaluation_date(text, base);
    extract_teacher_name(text, base);
    extract_teacher_rank(text, base);
    extract_dean(text, base);

    if let GradeSheet::Individual(slip) = sheet {
        extract_cause(text, slip);
        extract_expires(text, slip);
    }
}

fn extract_sheet_code(text: &str, base: &mut SheetBase) {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)№\s*(\d+)\s*освітній").unwrap());
    match RE.captures(text).and_then(|caps| caps[1].parse().ok()) {
        Some(code) => base.sheet_code = Some(code),
        None => base.sheet_code_error = Some("Відсутній номер відомості.".into()),
    }
}

fn extract_okr(text: &str, base: &mut SheetBase) {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)освітній рівень\s*([Ѐ-ӿ]+)").unwrap());
    let Some(caps) = RE.captures(text) else {
        base.okr_error = Some("Відсутній освітній рівень.".into());
        return;
    };
    // Case-folded for the set-membership check; the semantic check runs
    // even though the match itself succeeded.
    let okr = caps[1].to_lowercase();
    if okr != "бакалавр" && okr != "магістр" {
        base.okr_error = Some("Хибний освітній рівень, допустимі: бакалавр/магістр.".into());
    }
    base.okr = Some(okr);
}

fn extract_faculty(text: &str, base: &mut SheetBase) {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)факультет\s+([Ѐ-ӿ\s]+?)\s+рік").unwrap());
    match RE.captures(text) {
        Some(caps) => base.faculty = Some(caps[1].trim().to_string()),
        None => base.faculty_error = Some("Відсутній факультет.".into()),
    }
}

fn extract_edu_year(text: &str, base: &mut SheetBase) {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)рік навчання\s*(\d)").unwrap());
    match RE.captures(text).and_then(|caps| caps[1].parse().ok()) {
        Some(year) => base.edu_year = Some(year),
        None => base.edu_year_error = Some("Відсутній рік навчання.".into()),
    }
}

fn extract_group(text: &str, base: &mut SheetBase) {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)група\s*([Ѐ-ӿ\d]+)").unwrap());
    match RE.captures(text) {
        Some(caps) => base.group = Some(caps[1].to_string()),
        None => base.group_error = Some("Відсутня група.".into()),
    }
}

fn extract_subject(text: &str, base: &mut SheetBase) {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)дисципліна\s*([Ѐ-ӿ\s]+?)\s*семестр").unwrap());
    match RE.captures(text) {
        Some(caps) => base.subject = Some(caps[1].trim().to_string()),
        None => base.subject_error = Some("Відсутня дисципліна.".into()),
    }
}

fn extract_term(text: &str, base: &mut SheetBase) {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)семестр\s*(\d[Ѐ-ӿ]?)").unwrap());
    match RE.captures(text) {
        Some(caps) => base.term = Some(caps[1].to_string()),
        None => base.term_error = Some("Відсутній семестр.".into()),
    }
}

fn extract_credit_points(text: &str, base: &mut SheetBase) {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)залікові бали\s*(\d+)").unwrap());
    match RE.captures(text).and_then(|caps| caps[1].parse().ok()) {
        Some(points) => base.credit_points = Some(points),
        None => base.credit_points_error = Some("Відсутні залікові бали.".into()),
    }
}

fn extract_control_form(text: &str, base: &mut SheetBase) {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)форма контролю:?\s*([Ѐ-ӿ]+)").unwrap());
    let Some(caps) = RE.captures(text) else {
        base.control_form_error = Some("Відсутня форма контролю.".into());
        return;
    };
    let form = caps[1].to_lowercase();
    if form != "залік" && form != "екзамен" {
        base.control_form_error = Some("Допустимі форми контролю - 'залік' або 'екзамен'.".into());
    }
    base.control_form = Some(form);
}

fn extract_evaluation_date(text: &str, base: &mut SheetBase) {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)дата[^Ѐ-ӿ]*?(\d{1,2})[^Ѐ-ӿ]*([Ѐ-ӿ]+)\s*(\d{4})").unwrap());
    match RE.captures(text) {
        Some(caps) => base.evaluation_date = Some(parse_date_captures(&caps)),
        None => base.evaluation_date_error = Some("Відсутня або неповна дата.".into()),
    }
}

/// The teacher's full name sits between the "р." of the written-out date
/// and the comma that opens the rank list: three Cyrillic tokens, split
/// here into surname / first name / patronymic. A token containing a
/// period is an abbreviated initial and gets flagged even though the
/// match succeeded.
fn extract_teacher_name(text: &str, base: &mut SheetBase) {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)р\.?\s*((?:[Ѐ-ӿ'’.\-]+\s*){3}),").unwrap());
    let Some(caps) = RE.captures(text) else {
        base.teacher_name_error = Some("Відсутні ПІБ викладача.".into());
        return;
    };
    let mut tokens = caps[1].split_whitespace();
    base.teacher_surname = tokens.next().map(str::to_string);
    base.teacher_first_name = tokens.next().map(str::to_string);
    base.teacher_last_name = tokens.next().map(str::to_string);
    if [
        &base.teacher_surname,
        &base.teacher_first_name,
        &base.teacher_last_name,
    ]
    .iter()
    .any(|token| token.as_deref().is_some_and(|t| t.contains('.')))
    {
        base.teacher_name_error = Some("Ініціали замість повного ПІБ викладача.".into());
    }
}

fn extract_teacher_rank(text: &str, base: &mut SheetBase) {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i),(.+?)прізвище").unwrap());
    let Some(caps) = RE.captures(text) else {
        base.teacher_rank_error = Some("Відсутні посада та звання викладача.".into());
        return;
    };
    base.teacher_rank = caps[1]
        .split(',')
        .map(str::trim)
        .filter(|rank| !rank.is_empty())
        .map(str::to_string)
        .collect();
}

fn extract_dean(text: &str, base: &mut SheetBase) {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)декан факультету((?:\s+[Ѐ-ӿ'’\-]+){3})").unwrap());
    match RE.captures(text) {
        Some(caps) => base.dean = Some(caps[1].trim().to_string()),
        None => base.dean_error = Some("Відсутній декан.".into()),
    }
}

fn extract_cause(text: &str, slip: &mut IndividualSlip) {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)причина перенесення([Ѐ-ӿ\s]+?)\s*форма").unwrap());
    match RE.captures(text) {
        Some(caps) => slip.cause = Some(caps[1].trim().to_string()),
        None => slip.cause_error = Some("Відсутня причина перенесення.".into()),
    }
}

fn extract_expires(text: &str, slip: &mut IndividualSlip) {
    static RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)дійсне до[^Ѐ-ӿ]*?(\d{1,2})[^Ѐ-ӿ]*([Ѐ-ӿ]+)\s*(\d{4})").unwrap()
    });
    match RE.captures(text) {
        Some(caps) => slip.expires = Some(parse_date_captures(&caps)),
        None => {
            slip.expires_error = Some("Відсутня або неповна дата дійсності направлення.".into())
        }
    }
}

fn parse_date_captures(caps: &regex::Captures<'_>) -> PartialDate {
    PartialDate {
        day: caps[1].parse().ok(),
        month: Some(caps[2].trim().to_string()),
        year: caps[3].parse().ok(),
    }
}
