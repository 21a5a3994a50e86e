//! End-to-end extraction over raw text shaped like real PDF output:
//! header fields spread across lines, underscore fill, the roster table
//! between the signature column header and the footnote marker.

use vidomist_core::model::GradeSheet;
use vidomist_parsing::{ParsingError, parse_sheet};

const STUDENTS_SHEET_TEXT: &str = "\
НАЦІОНАЛЬНИЙ УНІВЕРСИТЕТ

ЗАЛІКОВО-ЕКЗАМЕНАЦІЙНА ВІДОМІСТЬ  № 1157  освітній рівень бакалавр
факультет  інформатики  рік навчання 3  група БП3
дисципліна  Бази даних  семестр 4д  залікові бали 5  форма контролю: екзамен
дата «17» червня 2021 р. Коваленко Ірина Василівна, доцент, кандидат технічних наук прізвище підпис
декан факультету Брюховецький Андрій Петрович
Кількість студентів на екзамені /тезі /заліку 2
Кількість студентів, які не з’явились на екзамен /тезу /залік 1
Кількість студентів, недопущених до екзамену /тези /заліку 1
Підпис
викладача
1 Шевченко Тарас Григорович Б 123/45 55 30 85 відмінно B
2 Бондар Ольга Петрівна Б 123/46 40 25 65 задовільно E
3 Мельник Олег Іванович Б 123/47 Не відвідував
4 Коваль Ірина Андріївна Б 123/48 Не допущена
*Примітка: ______
";

const SLIP_TEXT: &str = "\
ЗАЛІКОВО-ЕКЗАМЕНАЦІЙНИЙ ЛИСТОК  № 318  освітній рівень магістр
факультет  інформатики  рік навчання 2  група МП1
дисципліна  Розподілені системи  семестр 2  залікові бали 4  форма контролю: залік
причина перенесення  хвороба  форма контролю підтверджена
дата «03» лютого 2021 р. Савченко Дмитро Олегович, старший викладач прізвище підпис
декан факультету Брюховецький Андрій Петрович
дійсне до «01» липня 2021
Підпис
викладача
1 Руденко Андрій Сергійович М 271/19 48 32 80 зараховано C
*Примітка
";

#[test]
fn students_sheet_extracts_in_full() {
    let sheet = parse_sheet(STUDENTS_SHEET_TEXT, Some("1157.pdf")).unwrap();
    let GradeSheet::Students(students) = &sheet else {
        panic!("expected the collective variant, got {sheet:?}");
    };

    let base = &students.base;
    assert_eq!(base.file_name.as_deref(), Some("1157.pdf"));
    assert_eq!(base.sheet_code, Some(1157));
    assert_eq!(base.okr.as_deref(), Some("бакалавр"));
    assert_eq!(base.faculty.as_deref(), Some("інформатики"));
    assert_eq!(base.edu_year, Some(3));
    assert_eq!(base.group.as_deref(), Some("БП3"));
    assert_eq!(base.subject.as_deref(), Some("Бази даних"));
    assert_eq!(base.term.as_deref(), Some("4д"));
    assert_eq!(base.credit_points, Some(5));
    assert_eq!(base.control_form.as_deref(), Some("екзамен"));
    assert_eq!(base.teacher_surname.as_deref(), Some("Коваленко"));
    assert_eq!(base.dean.as_deref(), Some("Брюховецький Андрій Петрович"));

    assert_eq!(students.present, Some(2));
    assert_eq!(students.missing, Some(1));
    assert_eq!(students.banned, Some(1));
    assert!(!students.present_has_error);
    assert!(!students.missing_has_error);
    assert!(!students.banned_has_error);

    let roster = &base.roster;
    assert_eq!(roster.len(), 4);
    assert_eq!(roster[0].sum, Some(85));
    assert!(!roster[0].sum_has_error);
    assert!(!roster[0].ects_grade_has_error);
    assert_eq!(roster[2].national_grade.as_deref(), Some("не відвідував"));
    assert_eq!(roster[3].national_grade.as_deref(), Some("не допущений"));
}

#[test]
fn absent_rows_carry_errors_but_graded_rows_stay_clean() {
    let sheet = parse_sheet(STUDENTS_SHEET_TEXT, None).unwrap();
    let roster = &sheet.base().roster;

    // Graded rows are fully clean
    assert!(!roster[0].has_errors(), "{:#?}", roster[0]);
    assert!(!roster[1].has_errors(), "{:#?}", roster[1]);

    // Absent/barred rows have no grades, which the validator reports,
    // but the document as a whole is still returned
    assert!(roster[2].term_grade_error.is_some());
    assert!(roster[3].sum_has_error);
    assert!(!sheet.is_valid());
}

#[test]
fn missing_credit_points_does_not_cascade() {
    let text = STUDENTS_SHEET_TEXT.replace("залікові бали 5  ", "");
    let sheet = parse_sheet(&text, None).unwrap();
    let base = sheet.base();

    assert_eq!(base.credit_points, None);
    assert_eq!(
        base.credit_points_error.as_deref(),
        Some("Відсутні залікові бали.")
    );
    assert!(!sheet.is_valid());

    // Every other independently-satisfiable field is still populated
    assert_eq!(base.sheet_code, Some(1157));
    assert_eq!(base.subject.as_deref(), Some("Бази даних"));
    assert_eq!(base.control_form.as_deref(), Some("екзамен"));
    assert_eq!(base.roster.len(), 4);
}

#[test]
fn roster_count_mismatch_invalidates_the_sheet() {
    let text = STUDENTS_SHEET_TEXT.replace(
        "які не з’явились на екзамен /тезу /залік 1",
        "які не з’явились на екзамен /тезу /залік 3",
    );
    let sheet = parse_sheet(&text, None).unwrap();
    let GradeSheet::Students(students) = &sheet else {
        unreachable!()
    };
    assert_eq!(students.missing, Some(3));
    assert!(students.missing_has_error, "roster has 1 absent, stated 3");
    assert!(!students.present_has_error);
    assert!(!students.banned_has_error);
    assert!(!sheet.is_valid());
}

#[test]
fn missing_roster_marker_yields_empty_roster_and_count_errors() {
    let text = STUDENTS_SHEET_TEXT.replace("Підпис\nвикладача", "");
    let sheet = parse_sheet(&text, None).unwrap();
    let GradeSheet::Students(students) = &sheet else {
        unreachable!()
    };
    assert!(students.base.roster.is_empty());
    assert!(students.present_has_error);
    assert!(students.missing_has_error);
    assert!(students.banned_has_error);
    assert!(!sheet.is_valid());
}

#[test]
fn individual_slip_extracts_cause_and_expiry() {
    let sheet = parse_sheet(SLIP_TEXT, Some("318.pdf")).unwrap();
    let GradeSheet::Individual(slip) = &sheet else {
        panic!("expected the slip variant, got {sheet:?}");
    };

    assert_eq!(slip.base.sheet_code, Some(318));
    assert_eq!(slip.base.okr.as_deref(), Some("магістр"));
    assert_eq!(slip.base.edu_year, Some(2));
    assert_eq!(slip.base.control_form.as_deref(), Some("залік"));
    assert_eq!(slip.cause.as_deref(), Some("хвороба"));

    let expires = slip.expires.as_ref().expect("expiry date extracted");
    assert_eq!(expires.day, Some(1));
    assert_eq!(expires.month.as_deref(), Some("липня"));
    assert_eq!(expires.year, Some(2021));

    assert_eq!(slip.base.roster.len(), 1);
    assert_eq!(slip.base.roster[0].national_grade.as_deref(), Some("зараховано"));
    assert!(!slip.base.roster[0].national_grade_has_error);
}

#[test]
fn unclassifiable_text_is_the_only_fatal_error() {
    let err = parse_sheet("довідка про склад сім'ї", None).unwrap_err();
    assert!(matches!(err, ParsingError::UnknownDocumentType));
    assert_eq!(
        err.to_string(),
        "Не вдалося визначити тип заліково-екзаменаційного документу."
    );
}

#[test]
fn validation_is_idempotent_over_a_parsed_sheet() {
    let mut sheet = parse_sheet(STUDENTS_SHEET_TEXT, Some("1157.pdf")).unwrap();
    let first = sheet.clone();
    vidomist_core::validate_sheet(&mut sheet);
    assert_eq!(sheet, first);
}
