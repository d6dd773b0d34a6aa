//! Shared scroll position guarded for the cycle/renderer boundary
//!
//! Every field lives behind one mutex so a reader never sees an offset from one
//! restart combined with a content height from another. Writes coming from a
//! scroll cycle are additionally scoped by `CycleId`: once a newer cycle has
//! claimed the state, or the owning cycle has been marked finished, the old
//! cycle's writes are rejected under the same lock.

use std::sync::{Mutex, MutexGuard};

/// Identifies the cycle that currently owns the write side of a `ScrollState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CycleId(u64);

impl CycleId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Consistent view of every field taken under a single lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSnapshot {
    pub offset: i32,
    pub content_height: i32,
    pub running: bool,
    pub finished: bool,
}

#[derive(Debug, Default)]
struct Inner {
    snapshot: ScrollSnapshot,
    owner: u64,
}

impl Inner {
    fn owned_by(&self, id: CycleId) -> bool {
        self.owner == id.0 && !self.snapshot.finished
    }
}

#[derive(Debug, Default)]
pub struct ScrollState {
    inner: Mutex<Inner>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking listener must not wedge the renderer, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        self.lock().snapshot
    }

    pub fn offset(&self) -> i32 {
        self.lock().snapshot.offset
    }

    pub fn set_offset(&self, offset: i32) {
        self.lock().snapshot.offset = offset;
    }

    pub fn content_height(&self) -> i32 {
        self.lock().snapshot.content_height
    }

    pub fn set_content_height(&self, content_height: i32) {
        self.lock().snapshot.content_height = content_height;
    }

    pub fn is_running(&self) -> bool {
        self.lock().snapshot.running
    }

    pub fn set_running(&self, running: bool) {
        self.lock().snapshot.running = running;
    }

    /// Tell whichever cycle owns the state to stop writing.
    pub fn mark_finished(&self) {
        self.lock().snapshot.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.lock().snapshot.finished
    }

    /// Move the text back to its start position.
    pub fn reset(&self) {
        self.lock().snapshot.offset = 0;
    }

    /// Hand write ownership to a new cycle.
    ///
    /// Any cycle holding an older id loses the ability to mutate the state the
    /// moment this returns.
    pub fn claim(&self) -> CycleId {
        let mut inner = self.lock();
        inner.owner += 1;
        inner.snapshot.finished = false;
        CycleId(inner.owner)
    }

    pub fn owns(&self, id: CycleId) -> bool {
        self.lock().owned_by(id)
    }

    /// Mark `id` finished if it still owns the state. Returns false when the
    /// cycle had already lost ownership.
    pub fn finish(&self, id: CycleId) -> bool {
        let mut inner = self.lock();
        if !inner.owned_by(id) {
            return false;
        }
        inner.snapshot.finished = true;
        true
    }

    /// Run `f` against the fields under the lock, but only while `id` owns the
    /// state. Returns `None` without calling `f` otherwise.
    pub fn update<R>(&self, id: CycleId, f: impl FnOnce(&mut ScrollSnapshot) -> R) -> Option<R> {
        let mut inner = self.lock();
        if !inner.owned_by(id) {
            return None;
        }
        Some(f(&mut inner.snapshot))
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
