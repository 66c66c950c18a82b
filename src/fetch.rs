//! Fetch Hook
//!
//! `use_fetch` loads remote data into a signal and exposes `refetch()`.
//! Render code matches on `FetchState`, which is always exactly one of
//! loading, failed or loaded.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::ApiError;
use crate::lifecycle::use_mount_guard;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Loaded(T),
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => FetchState::Loaded(data),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Request bookkeeping: each load gets a ticket, and only the newest ticket
/// may write its response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchCycle {
    generation: u64,
}

impl FetchCycle {
    /// Start a request and return its ticket
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.generation
    }
}

/// Handle returned by `use_fetch`
pub struct FetchHandle<T: Send + Sync + 'static> {
    state: RwSignal<FetchState<T>>,
    trigger: RwSignal<u32>,
}

impl<T: Send + Sync + 'static> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FetchHandle<T> {}

impl<T: Clone + Send + Sync + 'static> FetchHandle<T> {
    pub fn state(&self) -> FetchState<T> {
        self.state.get()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&FetchState<T>) -> R) -> R {
        self.state.with(f)
    }

    /// Load again from the server, replacing whatever is shown
    pub fn refetch(&self) {
        self.trigger.update(|n| *n += 1);
    }

    /// Apply a confirmed server outcome to loaded data; no-op in other states
    pub fn update_loaded(&self, f: impl FnOnce(&mut T)) {
        self.state.update(|state| {
            if let FetchState::Loaded(data) = state {
                f(data);
            }
        });
    }
}

/// Fetch `fetcher(key)` whenever `key` changes or `refetch()` is called.
///
/// While `key` returns `None` nothing is requested and the state stays
/// `Loading`. Responses that arrive after a newer request started, or after
/// the owning component was disposed, are dropped.
pub fn use_fetch<K, T, Fut>(
    key: impl Fn() -> Option<K> + 'static,
    fetcher: impl Fn(K) -> Fut + 'static,
) -> FetchHandle<T>
where
    K: 'static,
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = RwSignal::new(FetchState::Loading);
    let trigger = RwSignal::new(0u32);
    let cycle = StoredValue::new(FetchCycle::default());
    let guard = use_mount_guard();

    Effect::new(move |_| {
        let _ = trigger.get();
        let Some(k) = key() else { return };

        let mut ticket = 0;
        cycle.update_value(|c| ticket = c.begin());
        state.set(FetchState::Loading);

        let request = untrack(|| fetcher(k));
        let guard = guard.clone();
        spawn_local(async move {
            let result = request.await;
            if !guard.is_mounted() {
                log::debug!("[FETCH] dropping response #{} for unmounted component", ticket);
                return;
            }
            if !cycle.try_with_value(|c| c.is_current(ticket)).unwrap_or(false) {
                log::debug!("[FETCH] dropping superseded response #{}", ticket);
                return;
            }
            if let Err(e) = &result {
                log::warn!("[FETCH] request #{} failed: {}", ticket, e);
            }
            let _ = state.try_set(FetchState::from_result(result));
        });
    });

    FetchHandle { state, trigger }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use any_spawner::Executor;

    use super::*;

    /// Run queued effects and spawned requests on this thread
    fn settle() {
        for _ in 0..4 {
            Executor::poll_local();
        }
    }

    #[test]
    fn test_from_result() {
        let failed: FetchState<Vec<u32>> =
            FetchState::from_result(Err(ApiError::Network("offline".to_string())));
        assert_eq!(failed, FetchState::Failed("network error: offline".to_string()));
        assert!(failed.data().is_none());

        let loaded = FetchState::from_result(Ok(vec![1, 2]));
        assert_eq!(loaded.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_refetch_calls_fetcher_once_and_replaces_list() {
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();

        let server = Arc::new(Mutex::new(vec![10u32, 20, 30]));
        let calls = Arc::new(AtomicUsize::new(0));
        let handle = {
            let server = Arc::clone(&server);
            let calls = Arc::clone(&calls);
            use_fetch(
                || Some(()),
                move |()| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    let rows = server.lock().map(|rows| rows.clone()).unwrap_or_default();
                    async move { Ok::<_, ApiError>(rows) }
                },
            )
        };

        settle();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(handle.state(), FetchState::Loaded(vec![10, 20, 30]));

        // entry 20 was deleted on the server; the reload replaces the list
        server.lock().unwrap().retain(|&id| id != 20);
        handle.refetch();
        settle();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(handle.state(), FetchState::Loaded(vec![10, 30]));

        // one retry click, one request
        handle.refetch();
        settle();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_failed_load_then_retry() {
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();

        let calls = Arc::new(AtomicUsize::new(0));
        let handle = {
            let calls = Arc::clone(&calls);
            use_fetch(
                || Some(()),
                move |()| {
                    let n = calls.fetch_add(1, Ordering::SeqCst);
                    async move {
                        if n == 0 {
                            Err(ApiError::Status { status: 500, message: "Database offline".to_string() })
                        } else {
                            Ok(vec!["Ava".to_string()])
                        }
                    }
                },
            )
        };

        settle();
        assert_eq!(handle.state(), FetchState::Failed("Database offline".to_string()));

        handle.refetch();
        settle();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(handle.state(), FetchState::Loaded(vec!["Ava".to_string()]));
    }

    #[test]
    fn test_update_loaded_only_touches_loaded_data() {
        let owner = Owner::new();
        owner.set();

        let handle = FetchHandle {
            state: RwSignal::new(FetchState::Failed("offline".to_string())),
            trigger: RwSignal::new(0),
        };
        handle.update_loaded(|rows: &mut Vec<u32>| rows.push(9));
        assert_eq!(handle.state(), FetchState::Failed("offline".to_string()));

        handle.state.set(FetchState::Loaded(vec![1, 2]));
        handle.update_loaded(|rows| rows.retain(|&r| r != 1));
        assert_eq!(handle.state(), FetchState::Loaded(vec![2]));
    }

    #[test]
    fn test_only_newest_ticket_is_current() {
        let mut cycle = FetchCycle::default();
        let slow = cycle.begin();
        let fast = cycle.begin();

        assert!(cycle.is_current(fast));
        assert!(!cycle.is_current(slow));
    }
}
