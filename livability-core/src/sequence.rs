use std::cell::Cell;

/// Identifies a dispatched request of a [`RequestSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Monotonically increasing request counter.
///
/// Only the response to the most recently dispatched
/// request is current, all older ones are stale.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: Cell<u64>,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&self) -> RequestToken {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestToken(next)
    }

    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest.get()
    }
}
