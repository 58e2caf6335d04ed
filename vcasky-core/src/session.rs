use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one search started through a [`SearchSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Last-search-wins guard for a caller that may fire overlapping searches.
///
/// Each search takes a ticket before it starts; a finished result is only
/// accepted while its ticket is still the newest one issued.
#[derive(Debug, Default)]
pub struct SearchSession {
    latest: AtomicU64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Returns `result` if `ticket` is still current, `None` if a newer
    /// search superseded it.
    pub fn accept<T>(&self, ticket: SearchTicket, result: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(result)
        } else {
            tracing::debug!(ticket = ticket.0, "Discarding stale search result");
            None
        }
    }
}
