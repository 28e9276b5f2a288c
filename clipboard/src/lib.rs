//! Cross-platform system clipboard access.
//!
//! This crate provides a unified API for the system clipboard across macOS,
//! Windows, Linux, Android, and iOS. At first use it walks a per-platform
//! list of backend candidates (native APIs, a windowing-library binding) and
//! keeps the first one that initializes; when none does, a no-op backend that
//! answers empty to every query takes over, so clipboard calls never fail.
//!
//! # Usage
//!
//! ```rust,ignore
//! use plumekit_clipboard as clipboard;
//!
//! clipboard::copy("Hello World");
//! assert_eq!(clipboard::paste(), "Hello World");
//! ```
//!
//! The raw `get`/`put`/`get_types` surface speaks mime-tagged bytes and is
//! mostly useful to widget code; `copy`/`paste` handle the platform text
//! encoding (UTF-16 on Windows) and are what applications normally want.

#![warn(missing_docs)]

mod backend;
mod select;
mod sys;
mod text;

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

pub use backend::{ClipboardBackend, NoopBackend};

#[cfg(target_os = "android")]
pub use sys::android::init_with_context;

/// Errors that can occur when talking to a clipboard backend.
///
/// These never cross the public `copy`/`paste`/`get`/`put` surface; they are
/// swallowed (and logged) so that a broken clipboard degrades to an empty one.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The backend cannot run in this environment (missing service, binary
    /// or display connection). Selection moves on to the next candidate.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// An error reported by the underlying platform API.
    #[error("platform error: {0}")]
    Platform(String),

    /// An IO error occurred (e.g. talking to an external helper process).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A system clipboard handle wrapping one concrete backend.
///
/// `get`/`put`/`get_types` pass mime-tagged bytes straight through to the
/// backend; `copy`/`paste` add the text normalization layer (platform mime
/// type and encoding, null-terminator handling).
pub struct Clipboard {
    backend: Box<dyn ClipboardBackend>,
}

impl std::fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clipboard")
            .field("backend", &self.backend.name())
            .finish()
    }
}

impl Clipboard {
    /// Select a backend for the current platform.
    ///
    /// Tries each candidate in platform order and keeps the first one that
    /// constructs; falls back to [`NoopBackend`] when all of them fail.
    #[must_use]
    pub fn select() -> Self {
        Self {
            backend: select::select(sys::CANDIDATES),
        }
    }

    /// Wrap an explicit backend instead of running selection.
    #[must_use]
    pub fn with_backend(backend: Box<dyn ClipboardBackend>) -> Self {
        Self { backend }
    }

    /// Name of the active backend, for diagnostics.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Copy `text` into the system clipboard.
    ///
    /// Empty input leaves the clipboard untouched. The text is stored under
    /// the platform's canonical text mime type, in the platform encoding.
    pub fn copy(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let format = text::NATIVE;
        self.put(&format.encode(text), format.mime_type);
    }

    /// Read text from the system clipboard.
    ///
    /// Falls back from the canonical text mime type to generic `text/plain`,
    /// decodes leniently and strips embedded NUL characters. Returns an empty
    /// string when the clipboard holds nothing usable.
    pub fn paste(&mut self) -> String {
        let format = text::NATIVE;
        let types = self.get_types();
        let mime_type = if types.iter().any(|t| t == format.mime_type) {
            format.mime_type
        } else {
            text::PLAIN_TEXT
        };
        self.get(mime_type)
            .map_or_else(String::new, |data| format.decode(&data))
    }

    /// Get the current clipboard entry for `mime_type`, if any.
    pub fn get(&mut self, mime_type: &str) -> Option<Vec<u8>> {
        match self.backend.get(mime_type) {
            Ok(data) => data,
            Err(err) => {
                log::debug!("clipboard: get from {} failed: {err}", self.backend.name());
                None
            }
        }
    }

    /// Put `data` on the clipboard tagged with `mime_type`.
    pub fn put(&mut self, data: &[u8], mime_type: &str) {
        if let Err(err) = self.backend.put(data, mime_type) {
            log::warn!("clipboard: put to {} failed: {err}", self.backend.name());
        }
    }

    /// Mime types currently readable from the clipboard.
    pub fn get_types(&mut self) -> Vec<String> {
        self.backend.get_types()
    }
}

static CLIPBOARD: OnceLock<Mutex<Clipboard>> = OnceLock::new();

fn lock(mutex: &Mutex<Clipboard>) -> MutexGuard<'_, Clipboard> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The process-wide clipboard handle.
///
/// Backend selection runs on the first call and the result is kept for the
/// lifetime of the process.
pub fn clipboard() -> &'static Mutex<Clipboard> {
    CLIPBOARD.get_or_init(|| Mutex::new(Clipboard::select()))
}

/// Copy `text` into the system clipboard. See [`Clipboard::copy`].
pub fn copy(text: &str) {
    lock(clipboard()).copy(text);
}

/// Read text from the system clipboard. See [`Clipboard::paste`].
#[must_use]
pub fn paste() -> String {
    lock(clipboard()).paste()
}

/// Get the current clipboard entry for `mime_type`. See [`Clipboard::get`].
#[must_use]
pub fn get(mime_type: &str) -> Option<Vec<u8>> {
    lock(clipboard()).get(mime_type)
}

/// Put `data` on the clipboard tagged with `mime_type`. See [`Clipboard::put`].
pub fn put(data: &[u8], mime_type: &str) {
    lock(clipboard()).put(data, mime_type);
}

/// Mime types currently readable from the clipboard.
#[must_use]
pub fn get_types() -> Vec<String> {
    lock(clipboard()).get_types()
}

/// The X11 PRIMARY selection ("cut buffer"), pasted by middle click.
///
/// Distinct from the CLIPBOARD selection that [`copy`]/[`paste`] use; only
/// exists on Linux and only when the `xsel` utility is present.
#[cfg(target_os = "linux")]
#[derive(Debug)]
pub struct CutBuffer {
    inner: Clipboard,
}

#[cfg(target_os = "linux")]
impl CutBuffer {
    /// Replace the PRIMARY selection with `text`.
    pub fn set(&mut self, text: &str) {
        self.inner.copy(text);
    }

    /// Read the PRIMARY selection as text, empty when nothing is selected.
    pub fn get(&mut self) -> String {
        self.inner.paste()
    }
}

#[cfg(target_os = "linux")]
static CUT_BUFFER: OnceLock<Option<Mutex<CutBuffer>>> = OnceLock::new();

/// The process-wide cut buffer handle, `None` when PRIMARY selection access
/// is unavailable.
#[cfg(target_os = "linux")]
pub fn cut_buffer() -> Option<&'static Mutex<CutBuffer>> {
    CUT_BUFFER
        .get_or_init(|| match sys::linux::primary_selection() {
            Ok(backend) => {
                log::info!("cut buffer: support enabled");
                Some(Mutex::new(CutBuffer {
                    inner: Clipboard::with_backend(backend),
                }))
            }
            Err(err) => {
                log::debug!("cut buffer: unavailable: {err}");
                None
            }
        })
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{PLAIN_TEXT, UTF8_TEXT};

    /// In-memory stand-in for an OS clipboard holding one mime-tagged entry.
    #[derive(Debug, Default)]
    struct MemoryBackend {
        entry: Option<(Vec<u8>, String)>,
    }

    impl ClipboardBackend for MemoryBackend {
        fn name(&self) -> &'static str {
            "memory"
        }

        fn get(&mut self, mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
            Ok(self
                .entry
                .as_ref()
                .filter(|(_, mime)| mime == mime_type)
                .map(|(data, _)| data.clone()))
        }

        fn put(&mut self, data: &[u8], mime_type: &str) -> Result<(), ClipboardError> {
            self.entry = Some((data.to_vec(), mime_type.to_string()));
            Ok(())
        }

        fn get_types(&mut self) -> Vec<String> {
            self.entry.iter().map(|(_, mime)| mime.clone()).collect()
        }
    }

    /// Backend whose every call errors, to check the shim swallows failures.
    #[derive(Debug)]
    struct FailingBackend;

    impl ClipboardBackend for FailingBackend {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn get(&mut self, _mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
            Err(ClipboardError::Platform("broken".into()))
        }

        fn put(&mut self, _data: &[u8], _mime_type: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Platform("broken".into()))
        }

        fn get_types(&mut self) -> Vec<String> {
            vec![UTF8_TEXT.to_string()]
        }
    }

    fn memory_clipboard() -> Clipboard {
        Clipboard::with_backend(Box::new(MemoryBackend::default()))
    }

    #[test]
    fn copy_paste_round_trip_ascii() {
        let mut clipboard = memory_clipboard();
        clipboard.copy("Hello World");
        assert_eq!(clipboard.paste(), "Hello World");
    }

    #[test]
    fn copy_paste_round_trip_unicode() {
        let mut clipboard = memory_clipboard();
        clipboard.copy("héllo wörld ✓");
        assert_eq!(clipboard.paste(), "héllo wörld ✓");
    }

    #[test]
    fn empty_clipboard_pastes_empty_string() {
        let mut clipboard = memory_clipboard();
        assert_eq!(clipboard.paste(), "");
    }

    #[test]
    fn unsupported_mime_type_gets_none() {
        let mut clipboard = memory_clipboard();
        clipboard.copy("some text");
        assert_eq!(clipboard.get("image/png"), None);
    }

    #[test]
    fn copy_empty_string_is_a_no_op() {
        let mut clipboard = memory_clipboard();
        clipboard.copy("");
        assert_eq!(clipboard.get_types(), Vec::<String>::new());
    }

    #[test]
    fn copy_overwrites_previous_entry() {
        let mut clipboard = memory_clipboard();
        clipboard.copy("first");
        clipboard.copy("second");
        assert_eq!(clipboard.paste(), "second");
    }

    #[test]
    fn paste_falls_back_to_generic_plain_text() {
        let mut clipboard = memory_clipboard();
        // entry tagged with the generic type only, as a foreign app might
        clipboard.put(&crate::text::NATIVE.encode("fallback"), PLAIN_TEXT);
        if crate::text::NATIVE.mime_type != PLAIN_TEXT {
            assert!(!clipboard.get_types().contains(&crate::text::NATIVE.mime_type.to_string()));
        }
        assert_eq!(clipboard.paste(), "fallback");
    }

    #[test]
    fn round_trip_via_raw_get_put() {
        let mut clipboard = memory_clipboard();
        clipboard.put(b"\x89PNG", "image/png");
        assert_eq!(clipboard.get_types(), vec!["image/png".to_string()]);
        assert_eq!(clipboard.get("image/png"), Some(b"\x89PNG".to_vec()));
    }

    #[test]
    fn backend_errors_degrade_to_empty() {
        let mut clipboard = Clipboard::with_backend(Box::new(FailingBackend));
        clipboard.copy("lost");
        assert_eq!(clipboard.paste(), "");
        assert_eq!(clipboard.get(UTF8_TEXT), None);
    }

    #[test]
    fn backend_name_reports_active_backend() {
        let clipboard = memory_clipboard();
        assert_eq!(clipboard.backend_name(), "memory");
    }
}
