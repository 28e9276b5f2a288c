//! Platform-specific clipboard backend implementations.

use crate::select::Candidate;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "macos")]
pub(crate) mod apple;

#[cfg(target_os = "android")]
pub(crate) mod android;

#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))]
pub(crate) mod arboard;

/// Backend candidates for the current platform, in selection order.
///
/// Native backends come first, the windowing-library binding last; the no-op
/// fallback is appended by the selector itself.
#[cfg(target_os = "linux")]
pub(crate) const CANDIDATES: &[Candidate] = &[
    Candidate {
        name: "klipper",
        construct: linux::klipper::construct,
    },
    Candidate {
        name: "xsel",
        construct: linux::xsel::construct,
    },
    Candidate {
        name: "arboard",
        construct: arboard::construct,
    },
];

/// Backend candidates for the current platform, in selection order.
#[cfg(target_os = "windows")]
pub(crate) const CANDIDATES: &[Candidate] = &[
    Candidate {
        name: "win32",
        construct: windows::construct,
    },
    Candidate {
        name: "arboard",
        construct: arboard::construct,
    },
];

/// Backend candidates for the current platform, in selection order.
#[cfg(target_os = "macos")]
pub(crate) const CANDIDATES: &[Candidate] = &[
    Candidate {
        name: "nspaste",
        construct: apple::construct,
    },
    Candidate {
        name: "arboard",
        construct: arboard::construct,
    },
];

/// Backend candidates for the current platform, in selection order.
#[cfg(target_os = "android")]
pub(crate) const CANDIDATES: &[Candidate] = &[Candidate {
    name: "android",
    construct: android::construct,
}];

/// No system backend on this platform; selection degrades to noop.
#[cfg(not(any(
    target_os = "linux",
    target_os = "windows",
    target_os = "macos",
    target_os = "android"
)))]
pub(crate) const CANDIDATES: &[Candidate] = &[];
