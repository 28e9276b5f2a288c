//! Native Win32 clipboard backend.
//!
//! Works directly with `CF_UNICODETEXT`, so the bytes crossing this backend
//! are UTF-16-LE with a trailing NUL, exactly what the text shim produces on
//! Windows.

use windows::Win32::Foundation::{HANDLE, HGLOBAL, HWND};
use windows::Win32::System::DataExchange::{
    CloseClipboard, EmptyClipboard, GetClipboardData, IsClipboardFormatAvailable, OpenClipboard,
    SetClipboardData,
};
use windows::Win32::System::Memory::{
    GMEM_MOVEABLE, GlobalAlloc, GlobalFree, GlobalLock, GlobalSize, GlobalUnlock,
};
use windows::Win32::System::Ole::CF_UNICODETEXT;

use crate::ClipboardError;
use crate::backend::ClipboardBackend;
use crate::text;

pub(crate) fn construct() -> Result<Box<dyn ClipboardBackend>, ClipboardError> {
    Ok(Box::new(WindowsBackend::new()?))
}

const FORMAT: u32 = CF_UNICODETEXT.0 as u32;

/// Holds the clipboard open for the duration of one operation.
struct OpenGuard;

impl OpenGuard {
    fn open() -> Result<Self, ClipboardError> {
        unsafe { OpenClipboard(None::<HWND>) }
            .map_err(|err| ClipboardError::Platform(format!("OpenClipboard: {err}")))?;
        Ok(Self)
    }
}

impl Drop for OpenGuard {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseClipboard();
        }
    }
}

#[derive(Debug)]
pub(crate) struct WindowsBackend;

impl WindowsBackend {
    pub(crate) fn new() -> Result<Self, ClipboardError> {
        // probe open/close once so selection can move on if another process
        // keeps the clipboard locked
        let _guard = OpenGuard::open()?;
        Ok(Self)
    }
}

impl ClipboardBackend for WindowsBackend {
    fn name(&self) -> &'static str {
        "win32"
    }

    fn get(&mut self, mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        if !text::is_text_mime(mime_type) {
            return Ok(None);
        }
        let _guard = OpenGuard::open()?;
        let Ok(handle) = (unsafe { GetClipboardData(FORMAT) }) else {
            // no CF_UNICODETEXT entry on the clipboard
            return Ok(None);
        };
        let hglobal = HGLOBAL(handle.0);
        let ptr = unsafe { GlobalLock(hglobal) };
        if ptr.is_null() {
            return Ok(None);
        }
        let size = unsafe { GlobalSize(hglobal) };
        let mut data = unsafe { std::slice::from_raw_parts(ptr.cast::<u8>(), size) }.to_vec();
        unsafe {
            let _ = GlobalUnlock(hglobal);
        }
        // GlobalSize reports the allocation, which may exceed the stored
        // string; the entry ends at the NUL terminator
        data.truncate(text::utf16_len_to_nul(&data));
        Ok(Some(data))
    }

    fn put(&mut self, data: &[u8], mime_type: &str) -> Result<(), ClipboardError> {
        if !text::is_text_mime(mime_type) {
            return Err(ClipboardError::Platform(format!(
                "win32 backend cannot store {mime_type}"
            )));
        }
        let _guard = OpenGuard::open()?;
        unsafe { EmptyClipboard() }
            .map_err(|err| ClipboardError::Platform(format!("EmptyClipboard: {err}")))?;
        let hglobal = unsafe { GlobalAlloc(GMEM_MOVEABLE, data.len()) }
            .map_err(|err| ClipboardError::Platform(format!("GlobalAlloc: {err}")))?;
        let ptr = unsafe { GlobalLock(hglobal) };
        if ptr.is_null() {
            return Err(ClipboardError::Platform("GlobalLock failed".into()));
        }
        unsafe {
            std::ptr::copy_nonoverlapping(data.as_ptr(), ptr.cast::<u8>(), data.len());
            let _ = GlobalUnlock(hglobal);
        }
        // on success the system owns the allocation
        if let Err(err) = unsafe { SetClipboardData(FORMAT, Some(HANDLE(hglobal.0))) } {
            unsafe {
                let _ = GlobalFree(Some(hglobal));
            }
            return Err(ClipboardError::Platform(format!("SetClipboardData: {err}")));
        }
        Ok(())
    }

    fn get_types(&mut self) -> Vec<String> {
        if unsafe { IsClipboardFormatAvailable(FORMAT) }.is_ok() {
            vec![text::UTF8_TEXT.to_string(), text::PLAIN_TEXT.to_string()]
        } else {
            Vec::new()
        }
    }
}
