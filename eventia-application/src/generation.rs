use std::sync::atomic::{AtomicU64, Ordering};

use eventia_domain::Generation;

/// Hands out increasing tickets; only the latest one may render.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: AtomicU64,
}

impl RequestGeneration {
    pub fn next(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn current(&self) -> Generation {
        Generation(self.current.load(Ordering::SeqCst))
    }

    pub fn is_current(&self, ticket: Generation) -> bool {
        self.current() == ticket
    }
}
