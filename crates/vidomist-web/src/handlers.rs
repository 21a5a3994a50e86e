use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use vidomist_core::assemble::{
    IndividualSlipPayload, StudentsSheetPayload, revalidate_individual_slip,
    revalidate_students_sheet,
};
use vidomist_parsing::{ParsingError, parse_sheet};

use crate::state::AppState;
use crate::upload;

/// `POST /parse` — extract a structured document from an uploaded PDF.
///
/// Classification failure is the only client error; any other extraction
/// or validation failure comes back embedded in the returned document,
/// which is never withheld.
pub async fn parse(State(state): State<Arc<AppState>>, multipart: Multipart) -> impl IntoResponse {
    let file = match upload::read_pdf_field(multipart).await {
        Ok(file) => file,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, &message),
    };

    let text = match state.producer.produce_text(&file.data) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(file = %file.filename, error = %e, "text production failed");
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string());
        }
    };

    match parse_sheet(&text, Some(&file.filename)) {
        Ok(sheet) => Json(sheet).into_response(),
        Err(e @ ParsingError::UnknownDocumentType) => {
            tracing::debug!(file = %file.filename, "unclassifiable document");
            error_response(StatusCode::BAD_REQUEST, &e.to_string())
        }
    }
}

/// `POST /check-students-sheet` — re-validate a corrected collective
/// sheet supplied as JSON.
pub async fn check_students_sheet(Json(payload): Json<StudentsSheetPayload>) -> impl IntoResponse {
    Json(revalidate_students_sheet(payload))
}

/// `POST /check-individual-slip` — re-validate a corrected slip.
pub async fn check_individual_slip(Json(payload): Json<IndividualSlipPayload>) -> impl IntoResponse {
    Json(revalidate_individual_slip(payload))
}

fn error_response(status: StatusCode, message: &str) -> axum::response::Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
