//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::permissions::Permissions;

/// Top-level pages reachable from the tab bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Tasks,
    ProjectManagers,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Tasks, Page::ProjectManagers];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Tasks => "Tasks",
            Page::ProjectManagers => "Project Managers",
        }
    }

    /// Location hash used so a reload lands on the same page
    pub fn hash(&self) -> &'static str {
        match self {
            Page::Tasks => "#tasks",
            Page::ProjectManagers => "#projectManagers",
        }
    }

    pub fn from_hash(hash: &str) -> Self {
        Page::ALL
            .into_iter()
            .find(|p| p.hash() == hash)
            .unwrap_or_default()
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Capabilities of the signed-in user
    pub permissions: Permissions,
    /// Page shown in the main area
    pub page: Page,
}

impl AppState {
    pub fn new(permissions: Permissions, page: Page) -> Self {
        Self { permissions, page }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Reactive permission lookup
pub fn has_permission(store: &AppStore, capability: &str) -> bool {
    store.permissions().with(|p| p.allows(capability))
}

/// Switch the main page and remember it in the location hash
pub fn store_set_page(store: &AppStore, page: Page) {
    store.page().set(page);
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(page.hash());
    }
}
