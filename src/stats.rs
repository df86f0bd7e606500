use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics collected during a pipeline run
#[derive(Debug, Default)]
pub struct RunStats {
    pub people_fetched: AtomicU64,
    pub batches_dispatched: AtomicU64,
    pub batches_inserted: AtomicU64,
    pub batches_failed: AtomicU64,
    pub rows_written: AtomicU64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_people_fetched(&self, count: u64) {
        self.people_fetched.fetch_add(count, Ordering::Relaxed);
    }

    pub fn inc_batches_dispatched(&self) {
        self.batches_dispatched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_batches_inserted(&self) {
        self.batches_inserted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_batches_failed(&self) {
        self.batches_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_rows_written(&self, count: u64) {
        self.rows_written.fetch_add(count, Ordering::Relaxed);
    }

    pub fn people_fetched(&self) -> u64 {
        self.people_fetched.load(Ordering::Relaxed)
    }

    pub fn batches_dispatched(&self) -> u64 {
        self.batches_dispatched.load(Ordering::Relaxed)
    }

    pub fn batches_inserted(&self) -> u64 {
        self.batches_inserted.load(Ordering::Relaxed)
    }

    pub fn batches_failed(&self) -> u64 {
        self.batches_failed.load(Ordering::Relaxed)
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written.load(Ordering::Relaxed)
    }
}
