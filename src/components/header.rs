//! Header Component
//!
//! Welcome line, theme toggle, notifications and the user menu.

use leptos::prelude::*;

use casino_access::Role;

use crate::api;
use crate::components::ThemeToggle;
use crate::store::{store_toggle_sidebar, store_user, use_app_store};

/// Placeholder until notifications are wired to the API
const NOTIFICATION_COUNT: u32 = 3;

/// Badge colour class for a role
pub fn role_badge_class(role: &Role) -> &'static str {
    match role {
        Role::SuperAdmin => "role-badge role-super-admin",
        Role::GeneralAdmin => "role-badge role-general-admin",
        Role::Manager => "role-badge role-manager",
        Role::Supervisor => "role-badge role-supervisor",
        Role::Other(_) => "role-badge",
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();
    let (menu_open, set_menu_open) = signal(false);

    let first_name = move || {
        store_user(&store)
            .map(|user| user.first_name().to_string())
            .unwrap_or_else(|| "Admin".to_string())
    };

    let sign_out = move |_| {
        set_menu_open.set(false);
        api::sign_out(store);
    };

    view! {
        <header class="header">
            <div class="header-left">
                <button class="icon-btn" title="Toggle menu" on:click=move |_| store_toggle_sidebar(&store)>
                    "☰"
                </button>
                <div>
                    <h1 class="header-title">"Welcome back, " {first_name}</h1>
                    <p class="header-subtitle">"We're very happy to see you on your personal dashboard"</p>
                </div>
            </div>

            <div class="header-right">
                <ThemeToggle />

                <button class="icon-btn notification-btn" title="Notifications">
                    "🔔"
                    <span class="notification-badge">{NOTIFICATION_COUNT}</span>
                </button>

                <div class="user-menu">
                    <button class="user-menu-trigger" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                        "👤"
                        <span class="user-menu-name">{move || store_user(&store).map(|u| u.full_name).unwrap_or_default()}</span>
                        "▾"
                    </button>

                    <Show when=move || menu_open.get()>
                        {move || store_user(&store).map(|user| view! {
                            <div class="user-menu-dropdown">
                                <div class="user-menu-info">
                                    <p class="user-name">{user.full_name.clone()}</p>
                                    <p class="user-username">"@" {user.username.clone()}</p>
                                    <span class=role_badge_class(&user.role)>{user.role.to_string()}</span>
                                </div>
                                <a class="user-menu-item" href="/settings" on:click=move |_| set_menu_open.set(false)>
                                    "⚙ Settings"
                                </a>
                                <button class="user-menu-item signout" on:click=sign_out>
                                    "⎋ Sign out"
                                </button>
                            </div>
                        })}
                    </Show>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_badge_classes() {
        assert_eq!(role_badge_class(&Role::SuperAdmin), "role-badge role-super-admin");
        assert_eq!(role_badge_class(&Role::Supervisor), "role-badge role-supervisor");
        assert_eq!(role_badge_class(&Role::Other("Auditor".to_string())), "role-badge");
    }
}
