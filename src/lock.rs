//! Lock strategy for unguarded maps.
//!
//! `LocalLock` satisfies `lock_api::RawRwLock` without any synchronization: it is a plain
//! `Cell` counter, so it is `Send` but not `Sync`. A map built on it can be owned by one thread,
//! moved between threads, or wrapped in an outer lock, but never shared unsynchronized.

use core::cell::Cell;

use parking_lot::lock_api::{GuardNoSend, RawRwLock};

const EXCLUSIVE: usize = usize::MAX;

/// A single-threaded reader/writer lock with no atomics.
///
/// Acquisition never blocks. A conflicting acquisition (exclusive while any guard is alive, or
/// shared while an exclusive guard is alive) can only happen through re-entrancy on the owning
/// thread and panics.
#[derive(Debug)]
pub struct LocalLock {
    // 0: free, EXCLUSIVE: write-locked, n: n readers.
    state: Cell<usize>,
}

unsafe impl RawRwLock for LocalLock {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: LocalLock = LocalLock {
        state: Cell::new(0),
    };

    type GuardMarker = GuardNoSend;

    #[inline]
    fn lock_shared(&self) {
        assert!(
            self.try_lock_shared(),
            "re-entrant access: map is already locked for writing"
        );
    }

    #[inline]
    fn try_lock_shared(&self) -> bool {
        let state = self.state.get();
        // EXCLUSIVE - 1 readers would collide with the write marker.
        if state >= EXCLUSIVE - 1 {
            return false;
        }
        self.state.set(state + 1);
        true
    }

    #[inline]
    unsafe fn unlock_shared(&self) {
        let state = self.state.get();
        debug_assert!(state != 0 && state != EXCLUSIVE);
        self.state.set(state - 1);
    }

    #[inline]
    fn lock_exclusive(&self) {
        assert!(
            self.try_lock_exclusive(),
            "re-entrant access: map is already locked"
        );
    }

    #[inline]
    fn try_lock_exclusive(&self) -> bool {
        if self.state.get() != 0 {
            return false;
        }
        self.state.set(EXCLUSIVE);
        true
    }

    #[inline]
    unsafe fn unlock_exclusive(&self) {
        debug_assert_eq!(self.state.get(), EXCLUSIVE);
        self.state.set(0);
    }

    #[inline]
    fn is_locked(&self) -> bool {
        self.state.get() != 0
    }
}
