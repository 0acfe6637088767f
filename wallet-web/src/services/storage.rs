//! `window.localStorage` backing for the wallet consent flag

use lib_wallet::{ConsentStorage, StorageError};
use wasm_bindgen::JsValue;

/// [`ConsentStorage`] over `window.localStorage`
///
/// Looks the storage up on every call; private browsing modes may disable it
/// at any time.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageConsent;

impl LocalStorageConsent {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;

        window
            .local_storage()
            .map_err(|e| StorageError::Access(js_error_message(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl ConsentStorage for LocalStorageConsent {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(js_error_message(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Access(js_error_message(&e)))
    }
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
