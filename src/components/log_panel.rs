//! Log Panel
//!
//! Collapsible view of the most recent log lines kept by the logger.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let toggle = move |_| {
        if !open.get_untracked() {
            set_lines.set(console_logger::recent_lines());
        }
        set_open.update(|o| *o = !*o);
    };

    view! {
        <footer class="log-panel">
            <button class="text-btn" on:click=toggle>
                {move || if open.get() { "Hide log" } else { "Show log" }}
            </button>
            <Show when=move || open.get()>
                <button class="text-btn" on:click=move |_| set_lines.set(console_logger::recent_lines())>
                    "Refresh"
                </button>
                <pre class="log-lines">
                    {move || lines.with(|l| l.join("\n"))}
                </pre>
            </Show>
        </footer>
    }
}
