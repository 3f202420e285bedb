use thiserror::Error;

/// Terminal signal raised by [`Logger::fatal`](crate::Logger::fatal).
///
/// Carries the fully formatted (and colored) `[ FATAL: ... ]` text. The
/// caller decides whether it ends the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{text}")]
pub struct FatalError {
    text: String,
}

impl FatalError {
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
