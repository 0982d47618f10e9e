//! Generation counter for request classes that may race (translation loads,
//! availability loads). Only the most recently issued ticket may apply its
//! response; older responses are dropped when they finally arrive.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    pub fn issue(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
