use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::lookup::{
    ABSENT, BARRED, MONTHS, NATIONAL_GRADES, canonical_national_grade, ects_bucket_matches,
};
use crate::model::{GradeSheet, IndividualSlip, PartialDate, SheetBase, StudentRecord, StudentsSheet};

/// Cross-field and roster validation pass.
///
/// Every invariant is evaluated independently; no failed check suppresses
/// a later one. Error messages are written only into empty slots, so
/// extraction-stage messages survive and a second pass over the same
/// document is a no-op. The aggregate `is_valid` is recomputed from the
/// complete error state at the end.
pub fn validate_sheet(sheet: &mut GradeSheet) {
    match sheet {
        GradeSheet::Students(students) => {
            validate_base(&mut students.base);
            validate_counts(students);
            students.base.is_valid = !students.has_errors();
        }
        GradeSheet::Individual(slip) => {
            validate_base(&mut slip.base);
            validate_slip(slip);
            slip.base.is_valid = !slip.has_errors();
        }
    }
}

/// Classify every roster row into exactly one of (present, missing,
/// banned). A row whose national grade is unrecognized or empty still
/// counts, as present; rows are never dropped from the tally.
pub fn classify_roster(roster: &[StudentRecord]) -> (u32, u32, u32) {
    let mut present = 0;
    let mut missing = 0;
    let mut banned = 0;
    for record in roster {
        match record
            .national_grade
            .as_deref()
            .and_then(canonical_national_grade)
        {
            Some(ABSENT) => missing += 1,
            Some(BARRED) => banned += 1,
            _ => present += 1,
        }
    }
    (present, missing, banned)
}

fn validate_base(base: &mut SheetBase) {
    if base.sheet_code.is_none() {
        set_error(&mut base.sheet_code_error, "Бракує коду відомості.");
    }

    let okr = base.okr.as_deref().map(str::to_lowercase);
    let okr_valid = matches!(okr.as_deref(), Some("бакалавр" | "магістр"));
    if !okr_valid {
        set_error(
            &mut base.okr_error,
            "Хибний освітній рівень, допустимі: бакалавр/магістр.",
        );
    }

    if is_blank(&base.faculty) {
        set_error(&mut base.faculty_error, "Відсутній факультет.");
    }

    // The year bound depends on the level; skipped entirely when the
    // level itself failed so one root cause does not cascade into a
    // second error.
    if okr_valid {
        let max_year = if okr.as_deref() == Some("магістр") { 2 } else { 4 };
        match base.edu_year {
            Some(year) if (1..=max_year).contains(&year) => {}
            _ => set_error(
                &mut base.edu_year_error,
                format!("Допустимі роки навчання - від 1 до {max_year}."),
            ),
        }
    }

    if is_blank(&base.group) {
        set_error(&mut base.group_error, "Група не вказана.");
    }
    if is_blank(&base.subject) {
        set_error(&mut base.subject_error, "Предмет не вказаний.");
    }

    if !term_is_valid(base.term.as_deref()) {
        set_error(
            &mut base.term_error,
            "Семестр має бути вказаний у форматі '<цифра 1-8>[буква]'.",
        );
    }

    match base.credit_points {
        Some(points) if (1..=62).contains(&points) => {}
        _ => set_error(
            &mut base.credit_points_error,
            "Залікові бали мають бути в межах від 1 до 62.",
        ),
    }

    let control_form = base.control_form.as_deref().map(str::to_lowercase);
    let form_valid = matches!(control_form.as_deref(), Some("залік" | "екзамен"));
    if !form_valid {
        set_error(
            &mut base.control_form_error,
            "Допустимі форми контролю - 'залік' або 'екзамен'.",
        );
    }

    if !date_is_valid(base.evaluation_date.as_ref(), true) {
        set_error(
            &mut base.evaluation_date_error,
            "Дата оцінювання має бути вказана, майбутні дати не допускаються.",
        );
    }

    let name_tokens = [
        &base.teacher_surname,
        &base.teacher_first_name,
        &base.teacher_last_name,
    ];
    if name_tokens.iter().any(|token| is_blank(token)) {
        set_error(&mut base.teacher_name_error, "ПІБ викладача відсутні.");
    } else if name_tokens
        .iter()
        .any(|token| token.as_deref().is_some_and(|t| t.contains('.')))
    {
        set_error(
            &mut base.teacher_name_error,
            "Ініціали замість повного ПІБ викладача.",
        );
    }

    if is_blank(&base.dean) {
        set_error(&mut base.dean_error, "ПІБ декана відсутні.");
    }

    // Per-record checks need the (valid) control form to pick the
    // national-grade vocabulary; with no valid form the membership check
    // flags the record instead of guessing.
    let form = if form_valid { control_form } else { None };
    for record in &mut base.roster {
        validate_record(record, form.as_deref());
    }
}

fn validate_record(record: &mut StudentRecord, control_form: Option<&str>) {
    if is_blank(&record.surname) || is_blank(&record.first_name) {
        set_error(
            &mut record.name_error,
            format!("Відсутнє ім'я в номера {}.", record.ordinal),
        );
    } else if [&record.surname, &record.first_name, &record.last_name]
        .iter()
        .any(|token| token.as_deref().is_some_and(|t| t.contains('.')))
    {
        set_error(
            &mut record.name_error,
            format!("Скорочене ім'я в номера {}.", record.ordinal),
        );
    }

    match record.book_no.as_deref() {
        Some(book) if book_no_is_valid(book) => {}
        _ => set_error(
            &mut record.book_no_error,
            format!(
                "Відсутній або хибний код залікової книжки у номера {}.",
                record.ordinal
            ),
        ),
    }

    match record.term_grade {
        Some(grade) if (0..=100).contains(&grade) => {}
        _ => set_error(
            &mut record.term_grade_error,
            "Оцінка за триместр має бути в межах 0-100.",
        ),
    }

    match record.exam_grade {
        Some(grade) if (0..=40).contains(&grade) => {}
        _ => set_error(
            &mut record.exam_grade_error,
            "Оцінка за залік/екзамен має бути в межах 0-40.",
        ),
    }

    record.sum_has_error = match (record.term_grade, record.exam_grade, record.sum) {
        (Some(term), Some(exam), Some(sum)) => sum != term + exam,
        _ => true,
    };

    record.national_grade_has_error = match (control_form, record.national_grade.as_deref()) {
        (Some(form), Some(raw)) => match canonical_national_grade(raw) {
            Some(canonical) => !NATIONAL_GRADES
                .get(form)
                .is_some_and(|vocabulary| vocabulary.contains(canonical)),
            None => true,
        },
        _ => true,
    };

    record.ects_grade_has_error = match (record.ects_grade, record.sum) {
        (Some(letter), Some(sum)) => !ects_bucket_matches(letter, sum).unwrap_or(false),
        _ => true,
    };
}

/// Three independent, symmetric comparisons of the stated counts against
/// the roster-derived tallies. A missing stated count fails its own
/// comparison and nothing else.
fn validate_counts(sheet: &mut StudentsSheet) {
    let (present, missing, banned) = classify_roster(&sheet.base.roster);
    sheet.present_has_error = sheet.present != Some(present);
    sheet.missing_has_error = sheet.missing != Some(missing);
    sheet.banned_has_error = sheet.banned != Some(banned);
}

fn validate_slip(slip: &mut IndividualSlip) {
    if is_blank(&slip.cause) {
        set_error(&mut slip.cause_error, "Причина перенесення не вказана.");
    }
    // A validity-until date lies in the future by nature, so unlike the
    // evaluation date it carries no not-after-today bound.
    if !date_is_valid(slip.expires.as_ref(), false) {
        set_error(
            &mut slip.expires_error,
            "Дата 'дійсне до' відсутня або хибна.",
        );
    }
}

/// Record a message unless the slot already carries one; an
/// extraction-stage message survives re-validation.
fn set_error(slot: &mut Option<String>, message: impl Into<String>) {
    if slot.is_none() {
        *slot = Some(message.into());
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

fn term_is_valid(term: Option<&str>) -> bool {
    let Some(term) = term else { return false };
    let mut chars = term.chars();
    let Some(digit) = chars.next().and_then(|c| c.to_digit(10)) else {
        return false;
    };
    if !(1..=8).contains(&digit) {
        return false;
    }
    match chars.next() {
        None => true,
        Some(suffix) => chars.next().is_none() && matches!(suffix, 'a'..='z' | 'а'..='я'),
    }
}

fn book_no_is_valid(book: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[Ѐ-ӿ]\s?\d{3}/\d{2}[а-я]?$").unwrap());
    RE.is_match(book)
}

fn resolve_date(date: &PartialDate) -> Option<NaiveDate> {
    let day = date.day?;
    let month = date.month.as_deref()?;
    let year = date.year?;
    let month_no = MONTHS.get(month.to_lowercase().as_str()).copied()?;
    NaiveDate::from_ymd_opt(year, month_no, day)
}

fn date_is_valid(date: Option<&PartialDate>, forbid_future: bool) -> bool {
    let Some(date) = date else { return false };
    let Some(resolved) = resolve_date(date) else {
        return false;
    };
    !forbid_future || resolved <= Local::now().date_naive()
}
