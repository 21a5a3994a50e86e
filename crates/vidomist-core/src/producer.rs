use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProducerError {
    #[error("failed to decode document: {0}")]
    Decode(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for document-to-text producers.
///
/// Implementors own the binary decode step; the extraction pipeline in
/// `vidomist-parsing` consumes the produced text blob and never sees the
/// underlying file format.
pub trait TextProducer: Send + Sync {
    /// Decode a document file into one text blob.
    fn produce_text(&self, data: &[u8]) -> Result<String, ProducerError>;
}
