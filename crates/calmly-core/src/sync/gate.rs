//! Discarding results of superseded loads.
//!
//! A view begins a load by taking a ticket. Starting another load, or
//! cancelling, invalidates earlier tickets; results presented with a stale
//! ticket are dropped instead of being applied to the view.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

#[derive(Debug, Default)]
pub struct RefreshGate {
    generation: AtomicU64,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load, superseding any in progress.
    pub fn begin(&self) -> RefreshTicket {
        RefreshTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Invalidate every outstanding ticket (view torn down).
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// `Some(value)` if `ticket` is still current, otherwise drop it.
    pub fn accept<T>(&self, ticket: RefreshTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            tracing::debug!(ticket = ticket.0, "discarding stale load result");
            None
        }
    }
}
