//! Theme Context
//!
//! Theme preference shared via Leptos Context API.

use leptos::prelude::*;

use casino_access::{ThemePreference, ThemeState, ThemeStore};

use crate::browser::{self, BrowserStorage};

/// App-wide theme signals provided via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme - read
    pub state: ReadSignal<ThemeState>,
    /// Current theme - write
    set_state: WriteSignal<ThemeState>,
    /// Persisting store behind the signal
    store: StoredValue<ThemeStore<BrowserStorage>>,
}

impl ThemeContext {
    fn load() -> Self {
        let store = ThemeStore::load(BrowserStorage, browser::system_prefers_dark());
        let (state, set_state) = signal(store.state());
        Self {
            state,
            set_state,
            store: StoredValue::new(store),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.state.get().is_dark()
    }

    pub fn preference(&self) -> ThemePreference {
        self.state.get().preference
    }

    /// Flip between light and dark
    pub fn toggle(&self) {
        self.change(|store| store.toggle());
    }

    pub fn set(&self, preference: ThemePreference) {
        self.change(|store| store.set(preference));
    }

    fn change(&self, apply: impl FnOnce(&mut ThemeStore<BrowserStorage>) -> ThemeState) {
        let mut next = None;
        self.store.update_value(|store| next = Some(apply(store)));
        if let Some(state) = next {
            self.set_state.set(state);
        }
    }
}

/// Load the theme, provide it to all children and keep `<html class="dark">`
/// in sync with it.
pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext::load();
    provide_context(ctx);

    Effect::new(move |_| {
        browser::apply_theme_class(ctx.state.get().is_dark());
    });

    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
