//! Linux clipboard backends: Klipper over D-Bus and the `xsel` utility.

pub(crate) mod klipper;
pub(crate) mod xsel;

use crate::ClipboardError;
use crate::backend::ClipboardBackend;

/// Construct an `xsel` backend bound to the PRIMARY selection, for the
/// middle-click cut buffer.
pub(crate) fn primary_selection() -> Result<Box<dyn ClipboardBackend>, ClipboardError> {
    Ok(Box::new(xsel::XselBackend::new(xsel::Selection::Primary)?))
}
