//! # Synchronization Utilities
//!
//! monotable keeps very little shared state: the display width cache in
//! [`crate::cells`] and the output sink of [`crate::logging::StderrLogger`].
//! Both are guarded by a [`Mutex`] and accessed through [`lock_recover`].
//!
//! ## Poison Handling
//!
//! A mutex becomes poisoned when a thread panics while holding it. For both
//! users of this module the guarded data stays valid after such a panic:
//!
//! 1. **Width cache**: entries are pure functions of their key, so a stale or
//!    partially updated cache can only cost a recomputation.
//! 2. **Log sink**: a torn log line is preferable to losing the logger.
//!
//! So every lock recovers the inner guard instead of propagating the poison.
//!
//! | Scenario | Function |
//! |----------|----------|
//! | Production code | [`lock_recover`] |
//! | Test code | `.lock().unwrap()` |
//!
//! ```rust
//! use std::sync::Mutex;
//! use monotable::sync::lock_recover;
//!
//! let data = Mutex::new(vec![1, 2, 3]);
//! let guard = lock_recover(&data);
//! assert_eq!(guard.len(), 3);
//! ```

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering from poison if necessary.
///
/// If the mutex is poisoned, the data is recovered and the guard returned
/// anyway. In debug builds a `log` warning records the recovery.
///
/// # Panics
///
/// This function never panics.
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        #[cfg(debug_assertions)]
        log::warn!(target: "monotable::sync", "mutex poison recovered");
        poisoned.into_inner()
    })
}
