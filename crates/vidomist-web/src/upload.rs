use axum::extract::Multipart;

/// An uploaded grade-sheet file.
pub struct UploadedPdf {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Read the `pdf` field of a multipart upload, verifying PDF magic bytes.
pub async fn read_pdf_field(mut multipart: Multipart) -> Result<UploadedPdf, String> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("failed to read form field: {e}"))?
    {
        if field.name() != Some("pdf") {
            // Ignore unknown fields
            let _ = field.bytes().await;
            continue;
        }
        let filename = field.file_name().unwrap_or("upload.pdf").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| format!("failed to read file data: {e}"))?
            .to_vec();
        if !data.starts_with(b"%PDF-") {
            return Err("uploaded file does not appear to be a PDF".to_string());
        }
        return Ok(UploadedPdf { filename, data });
    }
    Err("no file uploaded".to_string())
}
