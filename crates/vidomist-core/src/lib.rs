pub mod assemble;
pub mod lookup;
pub mod model;
pub mod producer;
pub mod validate;

pub use assemble::{
    IndividualSlipPayload, SheetCorePayload, StudentRecordPayload, StudentsSheetPayload,
    revalidate_individual_slip, revalidate_students_sheet,
};
pub use model::{
    GradeSheet, IndividualSlip, PartialDate, SheetBase, StudentRecord, StudentsSheet,
};
pub use producer::{ProducerError, TextProducer};
pub use validate::{classify_roster, validate_sheet};
