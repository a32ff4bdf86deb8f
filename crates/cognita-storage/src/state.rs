use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects::{self, LocalStore};

/// Load a JSON document from the store.
pub fn load_json<T: DeserializeOwned>(store: &LocalStore, key: &str) -> Result<T, StorageError> {
    let body = objects::get_object(store, key)?;
    Ok(serde_json::from_slice(&body)?)
}

/// Save a JSON document to the store.
pub fn save_json<T: Serialize>(
    store: &LocalStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(store, key, &body)
}
