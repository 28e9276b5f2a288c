//! X11 clipboard backend shelling out to the `xsel` utility.
//!
//! Used both for the regular CLIPBOARD selection and for the PRIMARY
//! selection that backs the middle-click cut buffer.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::ClipboardError;
use crate::backend::ClipboardBackend;
use crate::text;

pub(crate) fn construct() -> Result<Box<dyn ClipboardBackend>, ClipboardError> {
    Ok(Box::new(XselBackend::new(Selection::Clipboard)?))
}

/// Which X11 selection the backend operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selection {
    Clipboard,
    Primary,
}

impl Selection {
    const fn flag(self) -> &'static str {
        match self {
            Self::Clipboard => "--clipboard",
            Self::Primary => "--primary",
        }
    }
}

#[derive(Debug)]
pub(crate) struct XselBackend {
    selection: Selection,
}

impl XselBackend {
    pub(crate) fn new(selection: Selection) -> Result<Self, ClipboardError> {
        if std::env::var_os("DISPLAY").is_none() {
            return Err(ClipboardError::Unavailable("DISPLAY is not set".into()));
        }
        // probe the binary once so selection can move on when it is missing
        let status = Command::new("xsel")
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if !status.success() {
            return Err(ClipboardError::Unavailable(format!(
                "xsel probe exited with {status}"
            )));
        }
        Ok(Self { selection })
    }
}

impl ClipboardBackend for XselBackend {
    fn name(&self) -> &'static str {
        "xsel"
    }

    fn get(&mut self, mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        if !text::is_text_mime(mime_type) {
            return Ok(None);
        }
        let output = Command::new("xsel")
            .args([self.selection.flag(), "--output"])
            .stdin(Stdio::null())
            .output()?;
        if !output.status.success() || output.stdout.is_empty() {
            return Ok(None);
        }
        Ok(Some(output.stdout))
    }

    fn put(&mut self, data: &[u8], _mime_type: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new("xsel")
            .args([self.selection.flag(), "--input"])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(data)?;
        }
        let status = child.wait()?;
        if !status.success() {
            return Err(ClipboardError::Platform(format!(
                "xsel exited with {status}"
            )));
        }
        Ok(())
    }

    fn get_types(&mut self) -> Vec<String> {
        vec![text::UTF8_TEXT.to_string(), text::PLAIN_TEXT.to_string()]
    }
}
