//! Page Header

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] title: String, #[prop(into)] subtitle: String) -> impl IntoView {
    view! {
        <div class="page-title">
            <h2>{title}</h2>
            <h5 class="page-subtitle">{subtitle}</h5>
        </div>
    }
}
