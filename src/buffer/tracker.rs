//! Live-instance accounting for owned pixel buffers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

#[derive(Debug, Default)]
struct Counters {
    live: AtomicUsize,
    total: AtomicUsize,
}

/// Counts buffers that currently own storage.
///
/// Cloning the tracker yields another handle to the same counters. Buffers
/// built with the plain constructors report to [`AllocationTracker::global`];
/// tests inject their own tracker to get counts isolated from other threads.
#[derive(Debug, Clone, Default)]
pub struct AllocationTracker {
    counters: Arc<Counters>,
}

impl AllocationTracker {
    /// Create a fresh tracker with both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide tracker used by default.
    pub fn global() -> &'static AllocationTracker {
        static GLOBAL: OnceLock<AllocationTracker> = OnceLock::new();
        GLOBAL.get_or_init(AllocationTracker::new)
    }

    /// Number of buffers currently owning storage.
    pub fn live(&self) -> usize {
        self.counters.live.load(Ordering::SeqCst)
    }

    /// Number of storage allocations ever recorded.
    pub fn total(&self) -> usize {
        self.counters.total.load(Ordering::SeqCst)
    }

    /// Whether two handles share the same counters.
    pub fn same_as(&self, other: &AllocationTracker) -> bool {
        Arc::ptr_eq(&self.counters, &other.counters)
    }

    pub(crate) fn acquire(&self) {
        self.counters.live.fetch_add(1, Ordering::SeqCst);
        self.counters.total.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn release(&self) {
        // Saturate instead of wrapping; a release without acquire is a bug upstream.
        let _ = self
            .counters
            .live
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }
}
