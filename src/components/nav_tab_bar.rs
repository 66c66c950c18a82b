//! Navigation Tab Bar Component
//!
//! Tab bar for switching between the dashboard pages.

use leptos::prelude::*;

use crate::store::{store_set_page, use_app_store, AppStateStoreFields, Page};

/// Navigation Tab Bar component
#[component]
pub fn NavTabBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="nav-tab-bar">
            {Page::ALL.into_iter().map(|page| {
                let is_active = move || store.page().get() == page;
                let tab_class = move || {
                    if is_active() { "nav-tab active" } else { "nav-tab" }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| store_set_page(&store, page)
                    >
                        {page.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
