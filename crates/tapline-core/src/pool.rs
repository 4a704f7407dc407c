//! Recycling store for event records.
//!
//! Records are built up front to the initial capacity, handed out by
//! [`Pool::obtain`] and returned with [`Pool::free`]. When the free list is
//! empty a new record is constructed, so `obtain` never fails; the cap only
//! limits how many idle records are retained.
//!
//! The pool carries no lock of its own. The pipeline only touches it while
//! holding its state mutex.

use crate::settings::PoolSettings;

/// Construct + reset strategy for pooled records.
pub trait Recycle {
    /// Builds a brand new record.
    fn fresh() -> Self;

    /// Clears a record before it goes back on the free list.
    fn reset(&mut self);
}

pub struct Pool<T: Recycle> {
    free: Vec<T>,
    max_free: usize,
    created: usize,
    peak_free: usize,
}

impl<T: Recycle> Pool<T> {
    pub fn new(settings: PoolSettings) -> Self {
        let initial = settings.initial_capacity.min(settings.max_free);
        let mut free = Vec::with_capacity(initial);
        free.extend((0..initial).map(|_| T::fresh()));
        Self {
            free,
            max_free: settings.max_free,
            created: initial,
            peak_free: initial,
        }
    }

    /// Returns a reset record, reusing an idle one when available.
    pub fn obtain(&mut self) -> T {
        match self.free.pop() {
            Some(record) => record,
            None => {
                self.created += 1;
                T::fresh()
            }
        }
    }

    /// Returns a record for reuse. Each record must be freed exactly once.
    pub fn free(&mut self, mut record: T) {
        if self.free.len() < self.max_free {
            record.reset();
            self.free.push(record);
            self.peak_free = self.peak_free.max(self.free.len());
        }
    }

    /// Idle records ready for reuse.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Records constructed over the pool's lifetime.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Largest number of idle records held at once.
    pub fn peak_free(&self) -> usize {
        self.peak_free
    }

    pub fn max_free(&self) -> usize {
        self.max_free
    }
}

impl<T: Recycle> Default for Pool<T> {
    fn default() -> Self {
        Self::new(PoolSettings::default())
    }
}
