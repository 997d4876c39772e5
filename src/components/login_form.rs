//! Login Form Component
//!
//! Username/password sign-in with inline validation and server errors.

use leptos::prelude::*;
use leptos::task::spawn_local;

use casino_access::Credentials;

use crate::api;
use crate::store::use_app_store;

/// Sign-in form shown when no session exists
#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_app_store();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        set_error.set(None);

        let credentials = Credentials::new(username.get(), password.get());
        if let Err(err) = credentials.validate() {
            set_error.set(Some(err.to_string()));
            return;
        }

        set_pending.set(true);
        spawn_local(async move {
            if let Err(err) = api::sign_in(store, credentials).await {
                set_error.set(Some(err.user_message()));
            }
            set_pending.set(false);
        });
    };

    let on_edit = move || {
        if error.get_untracked().is_some() {
            set_error.set(None);
        }
    };

    view! {
        <form class="login-form" on:submit=submit>
            <div class="form-field">
                <label for="username">"Username"</label>
                <input
                    id="username"
                    type="text"
                    placeholder="Enter your username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    prop:disabled=move || pending.get()
                    on:input=move |ev| {
                        set_username.set(event_target_value(&ev));
                        on_edit();
                    }
                />
            </div>

            <div class="form-field">
                <label for="password">"Password"</label>
                <div class="password-row">
                    <input
                        id="password"
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="Enter your password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        prop:disabled=move || pending.get()
                        on:input=move |ev| {
                            set_password.set(event_target_value(&ev));
                            on_edit();
                        }
                    />
                    <button
                        type="button"
                        class="password-toggle"
                        title=move || if show_password.get() { "Hide password" } else { "Show password" }
                        prop:disabled=move || pending.get()
                        on:click=move |_| set_show_password.update(|show| *show = !*show)
                    >
                        {move || if show_password.get() { "🙈" } else { "👁" }}
                    </button>
                </div>
            </div>

            {move || error.get().map(|message| view! {
                <div class="form-error" role="alert">{message}</div>
            })}

            <button type="submit" class="primary-btn" prop:disabled=move || pending.get()>
                {move || if pending.get() { "Signing in..." } else { "Sign in to Dashboard" }}
            </button>

            <div class="demo-credentials">
                <h4>"Demo Credentials:"</h4>
                <div><strong>"Super Admin:"</strong> " superadmin / admin123"</div>
                <div><strong>"Manager:"</strong> " manager / manager123"</div>
            </div>

            {direct_access_buttons()}
        </form>
    }
}

#[cfg(feature = "direct-access")]
fn direct_access_buttons() -> impl IntoView {
    use casino_access::Role;

    let store = use_app_store();
    view! {
        <div class="direct-access">
            <h4>"Direct access (demo build)"</h4>
            <button type="button" class="secondary-btn" on:click=move |_| api::direct_access(store, Role::SuperAdmin)>
                "Super Admin"
            </button>
            <button type="button" class="secondary-btn" on:click=move |_| api::direct_access(store, Role::GeneralAdmin)>
                "Manager"
            </button>
        </div>
    }
}

#[cfg(not(feature = "direct-access"))]
fn direct_access_buttons() -> impl IntoView {}
