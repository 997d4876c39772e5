use leptos::prelude::*;

use crate::context::use_theme;

/// Light/dark switch for the header
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="icon-btn theme-toggle"
            title=move || if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| theme.toggle()
        >
            {move || if theme.is_dark() { "☀" } else { "🌙" }}
        </button>
    }
}
