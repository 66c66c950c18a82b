//! Component Lifecycle Helpers
//!
//! Requests cannot be aborted once sent, so components hold a `MountGuard`
//! and check it before writing a late response into their state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

#[derive(Debug, Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard released when the current reactive owner is disposed
pub fn use_mount_guard() -> MountGuard {
    let guard = MountGuard::new();
    let on_unmount = guard.clone();
    on_cleanup(move || on_unmount.release());
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_is_shared_between_clones() {
        let guard = MountGuard::new();
        let held_by_task = guard.clone();
        assert!(held_by_task.is_mounted());

        guard.release();
        assert!(!held_by_task.is_mounted());
    }
}
