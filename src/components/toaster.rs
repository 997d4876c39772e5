//! Toast Notifications
//!
//! Renders the store's toasts in the top-right corner.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, store_toasts, use_app_store, ToastKind};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toaster">
            <For
                each=move || store_toasts(&store)
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let (class, icon) = match toast.kind {
                        ToastKind::Success => ("toast success", "✓"),
                        ToastKind::Error => ("toast error", "✕"),
                    };
                    view! {
                        <div class=class role="status">
                            <span class="toast-icon">{icon}</span>
                            <span class="toast-message">{toast.message}</span>
                            <button class="toast-close" on:click=move |_| store_dismiss_toast(&store, id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
