//! First-match-wins backend selection.

use crate::ClipboardError;
use crate::backend::{ClipboardBackend, NoopBackend};

/// One entry of the platform candidate list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub(crate) name: &'static str,
    pub(crate) construct: fn() -> Result<Box<dyn ClipboardBackend>, ClipboardError>,
}

/// Try each candidate in order and return the first backend that constructs.
///
/// Construction failures are swallowed; when the whole list fails the no-op
/// backend takes over so the caller always gets a working handle.
pub(crate) fn select(candidates: &[Candidate]) -> Box<dyn ClipboardBackend> {
    for candidate in candidates {
        match (candidate.construct)() {
            Ok(backend) => {
                log::info!("clipboard: using {} backend", candidate.name);
                return backend;
            }
            Err(err) => {
                log::debug!("clipboard: {} backend unavailable: {err}", candidate.name);
            }
        }
    }
    log::warn!("clipboard: no system backend available, clipboard is disabled");
    Box::new(NoopBackend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

    fn failing() -> Result<Box<dyn ClipboardBackend>, ClipboardError> {
        Err(ClipboardError::Unavailable("nope".into()))
    }

    fn working() -> Result<Box<dyn ClipboardBackend>, ClipboardError> {
        CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(NoopBackend))
    }

    #[test]
    fn all_failing_candidates_fall_back_to_noop() {
        let candidates = [
            Candidate {
                name: "a",
                construct: failing,
            },
            Candidate {
                name: "b",
                construct: failing,
            },
        ];
        let backend = select(&candidates);
        assert_eq!(backend.name(), "noop");
    }

    #[test]
    fn empty_candidate_list_falls_back_to_noop() {
        assert_eq!(select(&[]).name(), "noop");
    }

    #[test]
    fn first_healthy_candidate_wins() {
        CONSTRUCTED.store(0, Ordering::SeqCst);
        let candidates = [
            Candidate {
                name: "broken",
                construct: failing,
            },
            Candidate {
                name: "good",
                construct: working,
            },
            Candidate {
                name: "later",
                construct: working,
            },
        ];
        let _backend = select(&candidates);
        // selection stops at the first success, "later" is never constructed
        assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), 1);
    }
}
