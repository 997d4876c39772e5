//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use casino_access::User;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in operator (None = show login)
    pub user: Option<User>,
    /// Sidebar expanded or collapsed to icons
    pub sidebar_open: bool,
    /// Visible notifications, oldest first
    pub toasts: Vec<Toast>,
    /// Id for the next toast
    pub next_toast_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            sidebar_open: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current operator, tracked
pub fn store_user(store: &AppStore) -> Option<User> {
    store.user().get()
}

/// Current operator without subscribing; for async completions
pub fn store_user_untracked(store: &AppStore) -> Option<User> {
    store.user().get_untracked()
}

pub fn store_set_user(store: &AppStore, user: Option<User>) {
    *store.user().write() = user;
}

pub fn store_sidebar_open(store: &AppStore) -> bool {
    store.sidebar_open().get()
}

pub fn store_toggle_sidebar(store: &AppStore) {
    let field = store.sidebar_open();
    let mut open = field.write();
    *open = !*open;
}

pub fn store_toasts(store: &AppStore) -> Vec<Toast> {
    store.toasts().get()
}

/// Add a toast and return its id
pub fn store_push_toast(store: &AppStore, kind: ToastKind, message: String) -> u32 {
    let id = {
        let field = store.next_toast_id();
        let mut next = field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast { id, kind, message });
    id
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

/// Show a toast that dismisses itself after [`TOAST_DURATION_MS`]
pub fn notify(store: AppStore, kind: ToastKind, message: impl Into<String>) {
    let id = store_push_toast(&store, kind, message.into());
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        store_dismiss_toast(&store, id);
    });
}
