use serde::{Deserialize, Serialize};

/// A date as it appears on a filled-in sheet: day number, Ukrainian month
/// name in the genitive case, four-digit year.
///
/// Kept as three independent optional components rather than a calendar
/// date, so a partially filled form can be represented and reported
/// instead of being rejected outright. Resolution to a real calendar date
/// happens in the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialDate {
    pub day: Option<u32>,
    pub month: Option<String>,
    pub year: Option<i32>,
}

impl PartialDate {
    pub fn new(day: u32, month: impl Into<String>, year: i32) -> Self {
        Self {
            day: Some(day),
            month: Some(month.into()),
            year: Some(year),
        }
    }
}

/// One row of the student roster.
///
/// Value fields stay `None` when the corresponding subgroup of the row
/// pattern did not match; the paired error field or flag records why the
/// row is incomplete. Rows are never dropped, so the roster length always
/// matches the visible table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub ordinal: u32,
    pub surname: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub book_no: Option<String>,
    pub term_grade: Option<i64>,
    pub exam_grade: Option<i64>,
    pub sum: Option<i64>,
    /// Canonical national-grade label, or the raw phrase when it did not
    /// canonicalize (then `national_grade_has_error` is set).
    pub national_grade: Option<String>,
    pub ects_grade: Option<char>,
    pub name_error: Option<String>,
    pub book_no_error: Option<String>,
    pub term_grade_error: Option<String>,
    pub exam_grade_error: Option<String>,
    pub sum_has_error: bool,
    pub national_grade_has_error: bool,
    pub ects_grade_has_error: bool,
}

impl StudentRecord {
    pub fn has_errors(&self) -> bool {
        self.name_error.is_some()
            || self.book_no_error.is_some()
            || self.term_grade_error.is_some()
            || self.exam_grade_error.is_some()
            || self.sum_has_error
            || self.national_grade_has_error
            || self.ects_grade_has_error
    }
}

/// Fields common to both document variants, each extracted value paired
/// with an error slot. `is_valid` is derived from the complete error
/// state by the validator and never set independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetBase {
    pub file_name: Option<String>,
    pub sheet_code: Option<u32>,
    pub sheet_code_error: Option<String>,
    pub okr: Option<String>,
    pub okr_error: Option<String>,
    pub faculty: Option<String>,
    pub faculty_error: Option<String>,
    pub edu_year: Option<u32>,
    pub edu_year_error: Option<String>,
    pub group: Option<String>,
    pub group_error: Option<String>,
    pub subject: Option<String>,
    pub subject_error: Option<String>,
    pub term: Option<String>,
    pub term_error: Option<String>,
    pub credit_points: Option<u32>,
    pub credit_points_error: Option<String>,
    pub control_form: Option<String>,
    pub control_form_error: Option<String>,
    pub evaluation_date: Option<PartialDate>,
    pub evaluation_date_error: Option<String>,
    pub teacher_surname: Option<String>,
    pub teacher_first_name: Option<String>,
    pub teacher_last_name: Option<String>,
    pub teacher_name_error: Option<String>,
    pub teacher_rank: Vec<String>,
    pub teacher_rank_error: Option<String>,
    pub dean: Option<String>,
    pub dean_error: Option<String>,
    pub roster: Vec<StudentRecord>,
    pub is_valid: bool,
}

impl SheetBase {
    pub fn has_errors(&self) -> bool {
        self.sheet_code_error.is_some()
            || self.okr_error.is_some()
            || self.faculty_error.is_some()
            || self.edu_year_error.is_some()
            || self.group_error.is_some()
            || self.subject_error.is_some()
            || self.term_error.is_some()
            || self.credit_points_error.is_some()
            || self.control_form_error.is_some()
            || self.evaluation_date_error.is_some()
            || self.teacher_name_error.is_some()
            || self.teacher_rank_error.is_some()
            || self.dean_error.is_some()
            || self.roster.iter().any(StudentRecord::has_errors)
    }
}

/// Cohort-wide roster document ("заліково-екзаменаційна відомість") with
/// the three stated attendance counts printed under the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentsSheet {
    #[serde(flatten)]
    pub base: SheetBase,
    pub present: Option<u32>,
    pub present_has_error: bool,
    pub missing: Option<u32>,
    pub missing_has_error: bool,
    pub banned: Option<u32>,
    pub banned_has_error: bool,
}

impl StudentsSheet {
    pub fn has_errors(&self) -> bool {
        self.base.has_errors()
            || self.present_has_error
            || self.missing_has_error
            || self.banned_has_error
    }
}

/// Single-student rescheduled-exam slip ("заліково-екзаменаційний
/// листок") with a rescheduling cause and a validity-until date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualSlip {
    #[serde(flatten)]
    pub base: SheetBase,
    pub cause: Option<String>,
    pub cause_error: Option<String>,
    pub expires: Option<PartialDate>,
    pub expires_error: Option<String>,
}

impl IndividualSlip {
    pub fn has_errors(&self) -> bool {
        self.base.has_errors() || self.cause_error.is_some() || self.expires_error.is_some()
    }
}

/// A grade-sheet document of either variant, tagged on `sheet_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "sheet_type")]
pub enum GradeSheet {
    #[serde(rename = "students_sheet")]
    Students(StudentsSheet),
    #[serde(rename = "individual_slip")]
    Individual(IndividualSlip),
}

impl GradeSheet {
    pub fn base(&self) -> &SheetBase {
        match self {
            GradeSheet::Students(sheet) => &sheet.base,
            GradeSheet::Individual(slip) => &slip.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut SheetBase {
        match self {
            GradeSheet::Students(sheet) => &mut sheet.base,
            GradeSheet::Individual(slip) => &mut slip.base,
        }
    }

    pub fn has_errors(&self) -> bool {
        match self {
            GradeSheet::Students(sheet) => sheet.has_errors(),
            GradeSheet::Individual(slip) => slip.has_errors(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.base().is_valid
    }
}
