//! Ops Dashboard App
//!
//! Root component: provides shared context and switches between pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{LogPanel, NavTabBar, ProjectManagersPage, TaskBoard};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::permissions::Permissions;
use crate::store::{AppState, AppStateStoreFields, Page};

fn initial_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Page::from_hash(&hash))
        .unwrap_or_default()
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let permissions = Permissions::new(&config.permissions);
    let store = Store::new(AppState::new(permissions, initial_page()));
    provide_context(store);
    provide_context(AppContext::new(config));

    log::info!("[APP] starting on {:?}", store.page().get_untracked());

    view! {
        <div class="app-layout">
            <NavTabBar />
            <main class="main-content">
                {move || match store.page().get() {
                    Page::Tasks => view! { <TaskBoard /> }.into_any(),
                    Page::ProjectManagers => view! { <ProjectManagersPage /> }.into_any(),
                }}
            </main>
            <LogPanel />
        </div>
    }
}
