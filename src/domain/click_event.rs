//! Click event model for asynchronous click tracking.

/// An in-memory click notification for async processing.
///
/// Created by the redirect handler and passed to the background worker via a
/// bounded channel, decoupling the HTTP response from database writes. The
/// event carries only the short code; the worker resolves the link and the
/// database assigns the timestamp at insert time.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub code: String,
}

impl ClickEvent {
    /// Creates a new click event for the given short code.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
