//! Request generations: drop responses that a newer request has superseded.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket handed out when a request starts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic request counter owned by one page.
///
/// Take a ticket before awaiting a fetch; after the await, only apply the
/// result if the ticket is still the latest one issued.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: AtomicU64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
