use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{AppError, AppResult};

/// Single-slot permit shared by all three network operations. Acquired
/// before a call is issued and released on every exit path via the guard's
/// `Drop`, so a failed call can never leave the flag stuck.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag {
    inner: Arc<AtomicBool>,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Readable at any time without acquiring.
    pub fn is_busy(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }

    pub fn acquire(&self, operation: &str) -> AppResult<BusyGuard> {
        self.inner
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| AppError::Busy(format!("{operation} requested while busy")))?;
        Ok(BusyGuard {
            inner: self.inner.clone(),
        })
    }
}

#[derive(Debug)]
pub struct BusyGuard {
    inner: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.inner.store(false, Ordering::SeqCst);
    }
}
