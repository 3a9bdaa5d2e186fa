//! The boundary to the asynchronous symbolic-computation service.
//!
//! The editing core is single-threaded; a computation request is
//! fire-and-forget and its result is handed back whenever the service
//! replies. The only concurrency concern is a late result arriving after
//! the document has moved on, so the in-flight state is a single busy flag:
//! shells check it before letting a focus change block on a result, and
//! reset it to abandon a request on timeout. Service failures never touch
//! the document - they are logged and discarded.

use tracing::warn;

use crate::error::EngineError;

/// The computation service itself, e.g. a worker running a CAS.
pub trait Backend {
    /// Fires a computation request. The eventual result is delivered
    /// through [`Engine::complete`]; only submission failures are reported
    /// here.
    fn submit(&mut self, text: &str) -> Result<(), EngineError>;
}

/// Tracks the single in-flight request against a [`Backend`].
#[derive(Debug)]
pub struct Engine<B> {
    backend: B,
    busy: bool,
}

impl<B: Backend> Engine<B> {
    pub fn new(backend: B) -> Engine<B> {
        Engine { backend, busy: false }
    }

    /// Whether a request is in flight.
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Submits a request unless one is already in flight. Returns whether
    /// the request was accepted; a submission failure is logged and leaves
    /// the engine idle.
    pub fn request(&mut self, text: &str) -> bool {
        if self.busy {
            return false;
        }
        match self.backend.submit(text) {
            Ok(()) => {
                self.busy = true;
                true
            }
            Err(err) => {
                warn!(%err, "computation request failed");
                false
            }
        }
    }

    /// Delivers the service's reply. Errors, and results arriving after a
    /// [`reset`](Engine::reset), are logged and discarded.
    pub fn complete(&mut self, result: Result<String, EngineError>) -> Option<String> {
        if !self.busy {
            warn!("discarding stale computation result");
            return None;
        }
        self.busy = false;
        match result {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(%err, "computation failed");
                None
            }
        }
    }

    /// Abandons the in-flight request, if any; its eventual result will be
    /// treated as stale.
    pub fn reset(&mut self) {
        self.busy = false;
    }
}
