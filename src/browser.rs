//! Browser Bindings
//!
//! `localStorage`, the colour-scheme media query and the document-level
//! theme class.

use casino_access::{KeyValueStore, StorageError};

/// `window.localStorage` as a [`KeyValueStore`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write { key: key.to_string() })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Platform `prefers-color-scheme: dark`, false when unknown
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Toggle the `dark` class on `<html>`
pub fn apply_theme_class(is_dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    if let Err(err) = root.class_list().toggle_with_force("dark", is_dark) {
        tracing::warn!(?err, "failed to apply theme class");
    }
}
