//! Request sequencing for fetches whose responses may arrive out of order.
//!
//! Every fetch takes a ticket before it is issued. When the response comes
//! back it is applied only if its ticket is newer than the last applied one;
//! otherwise a fresher response has already landed and this one is dropped.

/// Sequence number handed out when a request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: u64,
    applied: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket. Tickets increase strictly.
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    /// Returns true and records the ticket if it is newer than the last
    /// applied one; returns false for stale responses.
    pub fn accept(&mut self, ticket: RequestTicket) -> bool {
        if ticket.0 > self.applied {
            self.applied = ticket.0;
            true
        } else {
            false
        }
    }

    pub fn last_applied(&self) -> u64 {
        self.applied
    }
}
