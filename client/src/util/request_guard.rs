//! Generation tickets for discarding stale async responses.
//!
//! DESIGN
//! ======
//! In-flight requests are never cancelled. Instead each fetch takes a
//! [`Ticket`] when it starts and checks it when it completes: a newer fetch
//! (a fresh keystroke, a retry) bumps the generation, and unmounting the page
//! retires the guard. Either way the late response is dropped instead of
//! written into state that no longer wants it.
//!
//! The counters are atomics behind `Arc` so the guard can move into
//! `on_cleanup`, which requires `Send + Sync`.

#[cfg(test)]
#[path = "request_guard_test.rs"]
mod request_guard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Generation stamp handed to one fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct RequestGuard {
    generation: Arc<AtomicU64>,
    retired: Arc<AtomicBool>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding every outstanding ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Ticket for the current generation, for follow-up requests that belong
    /// to the fetch already in progress.
    pub fn current(&self) -> Ticket {
        Ticket(self.generation.load(Ordering::Relaxed))
    }

    /// Whether a response carrying `ticket` may still be applied.
    pub fn accepts(&self, ticket: Ticket) -> bool {
        self.is_live() && self.generation.load(Ordering::Relaxed) == ticket.0
    }

    pub fn is_live(&self) -> bool {
        !self.retired.load(Ordering::Relaxed)
    }

    /// Reject every ticket from now on. Called when the owning page unmounts.
    pub fn retire(&self) {
        self.retired.store(true, Ordering::Relaxed);
    }
}
