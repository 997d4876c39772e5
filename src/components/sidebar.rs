//! Sidebar Component
//!
//! Navigation filtered by the operator's role and permissions.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use casino_access::{catalog, filter_navigation, utility_items, NavigationItem};

use crate::components::icon_glyph;
use crate::store::{store_sidebar_open, store_user, use_app_store};

/// Single navigation link
#[component]
fn NavLink(item: NavigationItem, #[prop(into)] expanded: Signal<bool>) -> impl IntoView {
    let location = use_location();
    let path = item.path.clone();
    let is_active = move || location.pathname.get() == path;
    let name = item.name.clone();
    let title = item.name.clone();

    view! {
        <a
            href=item.path.clone()
            class=move || if is_active() { "nav-link active" } else { "nav-link" }
            title=move || if expanded.get() { String::new() } else { title.clone() }
        >
            <span class="nav-icon">{icon_glyph(item.icon)}</span>
            <Show when=move || expanded.get()>
                <span class="nav-label">{name.clone()}</span>
            </Show>
        </a>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();
    let expanded = Signal::derive(move || store_sidebar_open(&store));

    // Recomputed whenever the signed-in user changes
    let sections = Memo::new(move |_| filter_navigation(store_user(&store).as_ref(), &catalog()));

    view! {
        <aside class=move || if expanded.get() { "sidebar" } else { "sidebar collapsed" }>
            <div class="sidebar-logo">
                <div class="logo-badge">"B"</div>
                <Show when=move || expanded.get()>
                    <span class="logo-title">"Bally's Admin"</span>
                </Show>
            </div>

            <nav class="sidebar-nav">
                <For
                    each=move || sections.get()
                    key=|section| section.title.clone()
                    children=move |section| {
                        let title = section.title;
                        view! {
                            <div class="nav-section">
                                <Show when=move || expanded.get()>
                                    <h4 class="nav-section-title">{title.clone()}</h4>
                                </Show>
                                {section.items.into_iter().map(|item| view! {
                                    <NavLink item=item expanded=expanded />
                                }).collect_view()}
                            </div>
                        }
                    }
                />
            </nav>

            <div class="sidebar-bottom">
                {utility_items().into_iter().map(|item| view! {
                    <NavLink item=item expanded=expanded />
                }).collect_view()}
            </div>

            {move || {
                let user = store_user(&store)?;
                expanded.get().then(|| view! {
                    <div class="sidebar-user">
                        <div class="user-avatar">{user.initial().to_string()}</div>
                        <div class="user-meta">
                            <p class="user-name">{user.full_name.clone()}</p>
                            <p class="user-role">{user.role.to_string()}</p>
                        </div>
                    </div>
                })
            }}
        </aside>
    }
}
