//! Desktop backend over the `arboard` windowing-library binding.
//!
//! The last resort before noop on desktop platforms. `arboard` deals in Rust
//! strings, so this adapter converts from and to the platform text encoding
//! to honor the byte contract of [`ClipboardBackend`].

use crate::ClipboardError;
use crate::backend::ClipboardBackend;
use crate::text;

pub(crate) fn construct() -> Result<Box<dyn ClipboardBackend>, ClipboardError> {
    Ok(Box::new(ArboardBackend::new()?))
}

pub(crate) struct ArboardBackend {
    clipboard: arboard::Clipboard,
}

impl std::fmt::Debug for ArboardBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArboardBackend").finish_non_exhaustive()
    }
}

impl ArboardBackend {
    pub(crate) fn new() -> Result<Self, ClipboardError> {
        let clipboard = arboard::Clipboard::new()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardBackend for ArboardBackend {
    fn name(&self) -> &'static str {
        "arboard"
    }

    fn get(&mut self, mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        if !text::is_text_mime(mime_type) {
            return Ok(None);
        }
        match self.clipboard.get_text() {
            Ok(contents) => Ok(Some(text::NATIVE.encode(&contents))),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(err) => Err(ClipboardError::Platform(err.to_string())),
        }
    }

    fn put(&mut self, data: &[u8], mime_type: &str) -> Result<(), ClipboardError> {
        if !text::is_text_mime(mime_type) {
            return Err(ClipboardError::Platform(format!(
                "arboard cannot store {mime_type}"
            )));
        }
        self.clipboard
            .set_text(text::NATIVE.decode(data))
            .map_err(|err| ClipboardError::Platform(err.to_string()))
    }

    fn get_types(&mut self) -> Vec<String> {
        match self.clipboard.get_text() {
            Ok(contents) if !contents.is_empty() => {
                if text::NATIVE.mime_type == text::PLAIN_TEXT {
                    vec![text::PLAIN_TEXT.to_string()]
                } else {
                    vec![text::UTF8_TEXT.to_string(), text::PLAIN_TEXT.to_string()]
                }
            }
            _ => Vec::new(),
        }
    }
}
