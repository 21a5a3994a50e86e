use serde::{Deserialize, Serialize};

use crate::model::{
    GradeSheet, IndividualSlip, PartialDate, SheetBase, StudentRecord, StudentsSheet,
};
use crate::validate::validate_sheet;

/// Roster row as supplied by a caller for re-validation: values only,
/// no error annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecordPayload {
    pub ordinal: u32,
    pub surname: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub book_no: Option<String>,
    pub term_grade: Option<i64>,
    pub exam_grade: Option<i64>,
    pub sum: Option<i64>,
    pub national_grade: Option<String>,
    pub ects_grade: Option<char>,
}

/// Fields common to both payload variants. There is no file name here:
/// a re-validation call carries corrected values, not a document file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetCorePayload {
    pub sheet_code: Option<u32>,
    pub okr: Option<String>,
    pub faculty: Option<String>,
    pub edu_year: Option<u32>,
    pub group: Option<String>,
    pub subject: Option<String>,
    pub term: Option<String>,
    pub credit_points: Option<u32>,
    pub control_form: Option<String>,
    pub evaluation_date: Option<PartialDate>,
    pub teacher_surname: Option<String>,
    pub teacher_first_name: Option<String>,
    pub teacher_last_name: Option<String>,
    #[serde(default)]
    pub teacher_rank: Vec<String>,
    pub dean: Option<String>,
    #[serde(default)]
    pub roster: Vec<StudentRecordPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentsSheetPayload {
    #[serde(flatten)]
    pub core: SheetCorePayload,
    pub present: Option<u32>,
    pub missing: Option<u32>,
    pub banned: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualSlipPayload {
    #[serde(flatten)]
    pub core: SheetCorePayload,
    pub cause: Option<String>,
    pub expires: Option<PartialDate>,
}

impl From<StudentRecordPayload> for StudentRecord {
    fn from(payload: StudentRecordPayload) -> Self {
        StudentRecord {
            ordinal: payload.ordinal,
            surname: payload.surname,
            first_name: payload.first_name,
            last_name: payload.last_name,
            book_no: payload.book_no,
            term_grade: payload.term_grade,
            exam_grade: payload.exam_grade,
            sum: payload.sum,
            national_grade: payload.national_grade,
            ects_grade: payload.ects_grade,
            ..Default::default()
        }
    }
}

impl From<SheetCorePayload> for SheetBase {
    fn from(payload: SheetCorePayload) -> Self {
        SheetBase {
            file_name: None,
            sheet_code: payload.sheet_code,
            okr: payload.okr,
            faculty: payload.faculty,
            edu_year: payload.edu_year,
            group: payload.group,
            subject: payload.subject,
            term: payload.term,
            credit_points: payload.credit_points,
            control_form: payload.control_form,
            evaluation_date: payload.evaluation_date,
            teacher_surname: payload.teacher_surname,
            teacher_first_name: payload.teacher_first_name,
            teacher_last_name: payload.teacher_last_name,
            teacher_rank: payload.teacher_rank,
            dean: payload.dean,
            roster: payload.roster.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl From<StudentsSheetPayload> for StudentsSheet {
    fn from(payload: StudentsSheetPayload) -> Self {
        StudentsSheet {
            base: payload.core.into(),
            present: payload.present,
            missing: payload.missing,
            banned: payload.banned,
            ..Default::default()
        }
    }
}

impl From<IndividualSlipPayload> for IndividualSlip {
    fn from(payload: IndividualSlipPayload) -> Self {
        IndividualSlip {
            base: payload.core.into(),
            cause: payload.cause,
            expires: payload.expires,
            ..Default::default()
        }
    }
}

/// Re-validation entry point for a collective sheet: assemble the full
/// document shape from the payload, then run the same validator the
/// extraction path uses.
pub fn revalidate_students_sheet(payload: StudentsSheetPayload) -> GradeSheet {
    let mut sheet = GradeSheet::Students(payload.into());
    validate_sheet(&mut sheet);
    sheet
}

/// Re-validation entry point for an individual slip.
pub fn revalidate_individual_slip(payload: IndividualSlipPayload) -> GradeSheet {
    let mut sheet = GradeSheet::Individual(payload.into());
    validate_sheet(&mut sheet);
    sheet
}
