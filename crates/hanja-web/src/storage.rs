//! `window.localStorage` as a [`StorageProvider`].

use hanja_engine::{StorageError, StorageProvider};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Browser localStorage. Every call re-fetches the Storage object, so a
/// page that loses storage access (private mode, quota) fails per call
/// rather than at startup.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{err:?}"))
}

impl StorageProvider for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
