use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use vidomist_core::lookup::canonical_national_grade;
use vidomist_core::model::StudentRecord;

/// One row pattern with optional subgroups: ordinal, 2-3 Cyrillic name
/// tokens, a record-book number of strict format, up to three integers
/// (term, exam, sum), a national-grade phrase, one trailing Latin letter.
static ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^\s*(\d+)\.?\s+                                  # ordinal
        ((?:[Ѐ-ӿ][Ѐ-ӿ'’\-]+\s*){2,3})?                  # name tokens
        (?:([Ѐ-ӿ]\s?\d{3}/\d{2}[а-я]?)\s*)?             # record-book number
        (?:(\d{1,3})\s*)?                                # term grade
        (?:(\d{1,3})\s*)?                                # exam grade
        (?:(\d{1,3})\s*)?                                # total
        ((?:[Ѐ-ӿ]+\s?)+?)?\s*                           # national grade phrase
        ([A-Za-z])?\s*$                                  # ECTS letter
        ",
    )
    .unwrap()
});

/// Scan the roster region line by line.
///
/// Lines that do not match the row pattern at all are headers, blank
/// separators or footnotes, a normal input shape, and are skipped
/// without an error. A line with an ordinal but missing subgroups still
/// becomes a record, so the roster length always matches the visible
/// table and the attendance tallies stay consistent with it.
pub fn extract_roster(table_text: &str) -> Vec<StudentRecord> {
    let mut roster = Vec::new();
    let mut skipped = 0usize;
    for line in table_text.lines() {
        match parse_row(line) {
            Some(record) => roster.push(record),
            None => skipped += 1,
        }
    }
    debug!(rows = roster.len(), skipped, "roster region scanned");
    roster
}

fn parse_row(line: &str) -> Option<StudentRecord> {
    let caps = ROW_RE.captures(line)?;
    let ordinal: u32 = caps[1].parse().ok()?;

    let mut record = StudentRecord {
        ordinal,
        ..Default::default()
    };

    match caps.get(2) {
        Some(name) => {
            let mut tokens = name.as_str().split_whitespace();
            record.surname = tokens.next().map(str::to_string);
            record.first_name = tokens.next().map(str::to_string);
            record.last_name = tokens.next().map(str::to_string);
        }
        None => record.name_error = Some(format!("Відсутнє ім'я в номера {ordinal}.")),
    }

    match caps.get(3) {
        Some(book) => record.book_no = Some(book.as_str().to_string()),
        None => {
            record.book_no_error =
                Some(format!("Відсутній код залікової книжки у номера {ordinal}."))
        }
    }

    record.term_grade = caps.get(4).and_then(|m| m.as_str().parse().ok());
    if record.term_grade.is_none() {
        record.term_grade_error = Some("Нема оцінки за триместр.".into());
    }
    record.exam_grade = caps.get(5).and_then(|m| m.as_str().parse().ok());
    if record.exam_grade.is_none() {
        record.exam_grade_error = Some("Нема оцінки за залік/екзамен.".into());
    }
    record.sum = caps.get(6).and_then(|m| m.as_str().parse().ok());
    record.sum_has_error = match (record.term_grade, record.exam_grade, record.sum) {
        (Some(term), Some(exam), Some(sum)) => sum != term + exam,
        _ => true,
    };

    match caps.get(7) {
        Some(phrase) => match canonical_national_grade(phrase.as_str()) {
            Some(canonical) => record.national_grade = Some(canonical.to_string()),
            None => {
                // Keep the raw phrase for the caller to see what was read
                record.national_grade = Some(phrase.as_str().trim().to_string());
                record.national_grade_has_error = true;
            }
        },
        None => record.national_grade_has_error = true,
    }

    record.ects_grade = caps.get(8).and_then(|m| m.as_str().chars().next());
    record.ects_grade_has_error = record.ects_grade.is_none();

    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_row_is_extracted() {
        let roster = extract_roster("1 Шевченко Тарас Григорович Б 123/45 55 30 85 відмінно A");
        assert_eq!(roster.len(), 1);
        let record = &roster[0];
        assert_eq!(record.ordinal, 1);
        assert_eq!(record.surname.as_deref(), Some("Шевченко"));
        assert_eq!(record.first_name.as_deref(), Some("Тарас"));
        assert_eq!(record.last_name.as_deref(), Some("Григорович"));
        assert_eq!(record.book_no.as_deref(), Some("Б 123/45"));
        assert_eq!(record.term_grade, Some(55));
        assert_eq!(record.exam_grade, Some(30));
        assert_eq!(record.sum, Some(85));
        assert_eq!(record.national_grade.as_deref(), Some("відмінно"));
        assert_eq!(record.ects_grade, Some('A'));
        assert!(!record.sum_has_error);
        assert!(!record.national_grade_has_error);
    }

    #[test]
    fn two_token_name_keeps_book_number() {
        let roster = extract_roster("2 Бондар Ольга Б 123/46 40 25 65 задовільно E");
        let record = &roster[0];
        assert_eq!(record.surname.as_deref(), Some("Бондар"));
        assert_eq!(record.first_name.as_deref(), Some("Ольга"));
        assert_eq!(record.last_name, None);
        assert_eq!(record.book_no.as_deref(), Some("Б 123/46"));
        assert_eq!(record.sum, Some(65));
    }

    #[test]
    fn headers_and_blank_lines_are_silently_skipped() {
        let text = "№ Прізвище, ім'я, по батькові\n\n---\n1 Шевченко Тарас Григорович Б 123/45 55 30 85 відмінно A\n";
        let roster = extract_roster(text);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].ordinal, 1);
    }

    #[test]
    fn absent_student_row_canonicalizes_gender_variants() {
        let roster = extract_roster(
            "3 Мельник Олег Іванович Б 123/47 Не відвідував\n4 Коваль Ірина Андріївна Б 123/48 Не відвідувала",
        );
        assert_eq!(roster.len(), 2);
        for record in &roster {
            assert_eq!(record.national_grade.as_deref(), Some("не відвідував"));
            assert!(!record.national_grade_has_error);
            assert!(record.term_grade.is_none());
            assert!(record.sum_has_error);
        }
    }

    #[test]
    fn barred_student_row_is_recognized() {
        let roster = extract_roster("5 Гончар Петро Миколайович Б 123/49 Не допущена");
        assert_eq!(roster[0].national_grade.as_deref(), Some("не допущений"));
        assert!(!roster[0].national_grade_has_error);
    }

    #[test]
    fn partial_row_is_kept_with_errors() {
        let roster = extract_roster("6 Ткаченко Марія Василівна 55 30 невідомо A");
        assert_eq!(roster.len(), 1);
        let record = &roster[0];
        assert!(record.book_no.is_none());
        assert!(record.book_no_error.is_some());
        assert_eq!(record.term_grade, Some(55));
        assert_eq!(record.exam_grade, Some(30));
        assert!(record.sum.is_none());
        assert!(record.sum_has_error);
        assert_eq!(record.national_grade.as_deref(), Some("невідомо"));
        assert!(record.national_grade_has_error);
        assert_eq!(record.ects_grade, Some('A'));
    }

    #[test]
    fn ordinal_only_line_still_produces_a_record() {
        let roster = extract_roster("7 \n");
        assert_eq!(roster.len(), 1);
        let record = &roster[0];
        assert_eq!(record.ordinal, 7);
        assert!(record.name_error.is_some());
        assert!(record.book_no_error.is_some());
        assert!(record.sum_has_error);
        assert!(record.national_grade_has_error);
        assert!(record.ects_grade_has_error);
    }

    #[test]
    fn rows_keep_document_order() {
        let text = "2 Бондар Ольга Петрівна Б 123/46 40 25 65 задовільно E\n1 Шевченко Тарас Григорович Б 123/45 55 30 85 відмінно A";
        let roster = extract_roster(text);
        assert_eq!(roster[0].ordinal, 2);
        assert_eq!(roster[1].ordinal, 1);
    }
}
