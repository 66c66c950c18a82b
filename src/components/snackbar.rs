//! Snackbar Component
//!
//! Renders a page's single notification slot in the bottom-right corner.

use leptos::prelude::*;

use crate::notify::{DismissReason, Notifier};

#[component]
pub fn Snackbar(notifier: Notifier) -> impl IntoView {
    view! {
        {move || notifier.current().map(|n| {
            let id = n.id;
            view! {
                <div class="snackbar bottom-right">
                    <div class=n.severity.css_class() role="alert">
                        <span class="alert-message">{n.message}</span>
                        <button
                            class="alert-close"
                            on:click=move |_| notifier.dismiss(id, DismissReason::CloseButton)
                        >
                            "×"
                        </button>
                    </div>
                </div>
            }
        })}
    }
}
