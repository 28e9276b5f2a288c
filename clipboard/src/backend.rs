//! Clipboard backend abstraction.

use crate::ClipboardError;

/// A concrete OS clipboard implementation.
///
/// Backends speak raw platform-encoded bytes tagged with a mime type. Text
/// encoding, mime-type fallback and NUL stripping live in
/// [`Clipboard`](crate::Clipboard), so implementations stay thin adapters
/// over the platform API.
pub trait ClipboardBackend: Send {
    /// Short backend identifier used in log output.
    fn name(&self) -> &'static str;

    /// Read the current entry for `mime_type`, `None` when the clipboard is
    /// empty or holds a different format.
    fn get(&mut self, mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError>;

    /// Replace the current entry with `data` tagged as `mime_type`.
    fn put(&mut self, data: &[u8], mime_type: &str) -> Result<(), ClipboardError>;

    /// Mime types currently readable from the clipboard.
    fn get_types(&mut self) -> Vec<String>;
}

/// Fallback backend that answers empty to every query.
///
/// Selected when no system backend initializes, so that clipboard calls keep
/// working (and doing nothing) on platforms or sessions without one.
#[derive(Debug, Default)]
pub struct NoopBackend;

impl ClipboardBackend for NoopBackend {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn get(&mut self, _mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        Ok(None)
    }

    fn put(&mut self, _data: &[u8], _mime_type: &str) -> Result<(), ClipboardError> {
        Ok(())
    }

    fn get_types(&mut self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_answers_empty() {
        let mut backend = NoopBackend;
        assert_eq!(backend.get("text/plain").unwrap(), None);
        assert!(backend.put(b"data", "text/plain").is_ok());
        assert!(backend.get_types().is_empty());
    }
}
