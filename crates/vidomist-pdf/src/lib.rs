//! PDF-to-text production behind the [`TextProducer`] seam.
//!
//! The extraction engine never sees PDF bytes; this crate owns the
//! decode and hands back one text blob.

use vidomist_core::producer::{ProducerError, TextProducer};

/// Decodes PDF bytes into a single text blob via `pdf-extract`.
pub struct PdfTextProducer;

impl TextProducer for PdfTextProducer {
    fn produce_text(&self, data: &[u8]) -> Result<String, ProducerError> {
        pdf_extract::extract_text_from_mem(data).map_err(|e| ProducerError::Decode(e.to_string()))
    }
}
