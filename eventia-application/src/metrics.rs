use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    backend_requests: AtomicU64,
    backend_errors: AtomicU64,
    renders: AtomicU64,
    stale_discarded: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub backend_requests: u64,
    pub backend_errors: u64,
    pub renders: u64,
    pub stale_discarded: u64,
}

impl Metrics {
    pub fn record_request(&self) {
        self.backend_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.backend_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_render(&self) {
        self.renders.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stale(&self) {
        self.stale_discarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            backend_requests: self.backend_requests.load(Ordering::Relaxed),
            backend_errors: self.backend_errors.load(Ordering::Relaxed),
            renders: self.renders.load(Ordering::Relaxed),
            stale_discarded: self.stale_discarded.load(Ordering::Relaxed),
        }
    }

    pub fn summary(&self) -> String {
        let snapshot = self.snapshot();
        format!(
            "requests={} errors={} renders={} stale_discarded={}",
            snapshot.backend_requests,
            snapshot.backend_errors,
            snapshot.renders,
            snapshot.stale_discarded
        )
    }
}
