use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::JsValue;

use super::{KeyValueStore, StoreError};

/// The page origin's `localStorage`.
///
/// Values are read and written verbatim; JSON handling happens in
/// [`super::entry`] because `currentNav` and `loadResourceForm` are stored as
/// bare strings that the typed `gloo-storage` accessors would reject.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn backend_error(e: JsValue) -> StoreError {
    StoreError::Backend(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        LocalStorage::raw().get_item(key).map_err(backend_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw().set_item(key, value).map_err(backend_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        LocalStorage::delete(key);
        Ok(())
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(LocalStorage::length() as usize)
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let storage = LocalStorage::raw();
        let length = storage.length().map_err(backend_error)?;
        let mut keys = Vec::with_capacity(length as usize);
        for index in 0..length {
            if let Some(key) = storage.key(index).map_err(backend_error)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
