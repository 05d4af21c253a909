use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;

/// Only one board may be live per process, so tests that build one take turns.
static BOARD_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Hold this for the duration of any test that creates a board.
pub fn serial() -> MutexGuard<'static, ()> {
    BOARD_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
