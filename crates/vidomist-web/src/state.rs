use vidomist_core::TextProducer;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub producer: Box<dyn TextProducer>,
}
