//! Settings Page
//!
//! Appearance, the signed-in account and client diagnostics.

use leptos::prelude::*;

use casino_access::ThemePreference;

use crate::components::{ComingSoon, TabBar};
use crate::context::use_theme;
use crate::store::{store_user, use_app_store};

const TABS: &[(&str, &str)] = &[
    ("profile", "Profile"),
    ("appearance", "Appearance"),
    ("notifications", "Notifications"),
    ("security", "Security"),
    ("system", "System"),
];

/// Diagnostics lines shown at once
const DIAGNOSTIC_LINES: usize = 50;

fn theme_label(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::Light => "Light",
        ThemePreference::Dark => "Dark",
        ThemePreference::System => "Match system",
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (active, set_active) = signal("profile");

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Settings"</h1>
                <p class="muted">"Console preferences and account details"</p>
            </div>

            <TabBar tabs=TABS active=active set_active=set_active />

            {move || match active.get() {
                "appearance" => view! { <AppearancePanel /> }.into_any(),
                "system" => view! { <DiagnosticsPanel /> }.into_any(),
                "notifications" => view! {
                    <ComingSoon title="Notifications" description="Choose which alerts reach you." />
                }.into_any(),
                "security" => view! {
                    <ComingSoon
                        title="Security"
                        description="Password changes and active sessions."
                        features=&["Change password", "Sign out other devices"]
                    />
                }.into_any(),
                _ => view! { <ProfilePanel /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProfilePanel() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="panel">
            <h2>"Account"</h2>
            {move || store_user(&store).map(|user| {
                let permissions = if user.permissions.is_empty() {
                    "none".to_string()
                } else {
                    user.permissions.iter().collect::<Vec<_>>().join(", ")
                };
                view! {
                    <dl class="detail-list">
                        <dt>"Name"</dt>
                        <dd>{user.full_name.clone()}</dd>
                        <dt>"Username"</dt>
                        <dd>{user.username.clone()}</dd>
                        <dt>"Role"</dt>
                        <dd>{user.role.to_string()}</dd>
                        <dt>"Permissions"</dt>
                        <dd>{permissions}</dd>
                    </dl>
                }
            })}
        </section>
    }
}

#[component]
fn AppearancePanel() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section class="panel">
            <h2>"Theme"</h2>
            <div class="theme-options">
                {ThemePreference::ALL.iter().map(|&preference| view! {
                    <label class="theme-option">
                        <input
                            type="radio"
                            name="theme"
                            prop:checked=move || theme.preference() == preference
                            on:change=move |_| theme.set(preference)
                        />
                        {theme_label(preference)}
                    </label>
                }).collect_view()}
            </div>
            <p class="muted">
                {move || if theme.is_dark() { "Dark mode is active." } else { "Light mode is active." }}
            </p>
        </section>
    }
}

#[component]
fn DiagnosticsPanel() -> impl IntoView {
    let read_lines = || {
        console_logger::buffer()
            .map(|buffer| {
                let lines = buffer.recent();
                let skip = lines.len().saturating_sub(DIAGNOSTIC_LINES);
                lines.into_iter().skip(skip).map(|line| line.to_string()).collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };
    let (lines, set_lines) = signal(read_lines());

    view! {
        <section class="panel">
            <div class="panel-header">
                <h2>"Client log"</h2>
                <button class="secondary-btn" on:click=move |_| set_lines.set(read_lines())>
                    "Refresh"
                </button>
            </div>
            <Show
                when=move || !lines.get().is_empty()
                fallback=|| view! { <p class="muted">"No log lines recorded."</p> }
            >
                <pre class="log-view">{move || lines.get().join("\n")}</pre>
            </Show>
        </section>
    }
}
