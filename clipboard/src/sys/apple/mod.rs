//! macOS clipboard backend over `NSPasteboard`.

use objc2_app_kit::{NSPasteboard, NSPasteboardTypeString};
use objc2_foundation::NSString;

use crate::ClipboardError;
use crate::backend::ClipboardBackend;
use crate::text;

pub(crate) fn construct() -> Result<Box<dyn ClipboardBackend>, ClipboardError> {
    Ok(Box::new(NsPasteboardBackend::new()))
}

#[derive(Debug)]
pub(crate) struct NsPasteboardBackend;

impl NsPasteboardBackend {
    pub(crate) const fn new() -> Self {
        Self
    }

    fn string_contents() -> Option<String> {
        let pasteboard = unsafe { NSPasteboard::generalPasteboard() };
        let contents = unsafe { pasteboard.stringForType(NSPasteboardTypeString) }?;
        Some(contents.to_string())
    }
}

impl ClipboardBackend for NsPasteboardBackend {
    fn name(&self) -> &'static str {
        "nspaste"
    }

    fn get(&mut self, mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        if !text::is_text_mime(mime_type) {
            return Ok(None);
        }
        Ok(Self::string_contents().map(String::into_bytes))
    }

    fn put(&mut self, data: &[u8], mime_type: &str) -> Result<(), ClipboardError> {
        if !text::is_text_mime(mime_type) {
            return Err(ClipboardError::Platform(format!(
                "pasteboard backend cannot store {mime_type}"
            )));
        }
        let contents = NSString::from_str(&text::NATIVE.decode(data));
        let pasteboard = unsafe { NSPasteboard::generalPasteboard() };
        let stored = unsafe {
            pasteboard.clearContents();
            pasteboard.setString_forType(&contents, NSPasteboardTypeString)
        };
        if stored {
            Ok(())
        } else {
            Err(ClipboardError::Platform(
                "NSPasteboard rejected the string".into(),
            ))
        }
    }

    fn get_types(&mut self) -> Vec<String> {
        if Self::string_contents().is_some_and(|contents| !contents.is_empty()) {
            vec![text::PLAIN_TEXT.to_string()]
        } else {
            Vec::new()
        }
    }
}
