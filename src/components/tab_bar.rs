use leptos::prelude::*;

/// Horizontal tabs backed by a local signal
///
/// # Arguments
/// * `tabs` - `(id, label)` pairs in display order
/// * `active` / `set_active` - id of the selected tab
#[component]
pub fn TabBar(
    tabs: &'static [(&'static str, &'static str)],
    active: ReadSignal<&'static str>,
    set_active: WriteSignal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="tab-bar">
            {tabs.iter().map(|&(id, label)| view! {
                <button
                    class=move || if active.get() == id { "tab active" } else { "tab" }
                    on:click=move |_| set_active.set(id)
                >
                    {label}
                </button>
            }).collect_view()}
        </div>
    }
}
