use chrono::Datelike;
use leptos::prelude::*;

use super::scroll::smooth_scroll_to;

#[component]
pub fn Footer(name: String) -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="py-8 px-4 border-t border-muted/30">
            <div class="max-w-6xl mx-auto flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-muted">
                <p>"© " <span id="year">{year}</span> " " {name} ". All rights reserved."</p>
                <button
                    class="hover:text-cyan transition-colors duration-200"
                    aria-label="Back to top"
                    on:click=move |_| smooth_scroll_to(0.0)
                >
                    <i class="fas fa-arrow-up me-2"></i>
                    "Back to top"
                </button>
            </div>
        </footer>
    }
}
