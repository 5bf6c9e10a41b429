//! In-memory preference store for tests and ephemeral sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::domain::ports::{PreferenceStore, PreferenceStoreError, validate_key};

/// Preference store that forgets everything on drop.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    values: RwLock<HashMap<String, Value>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn load(&self, key: &str) -> Result<Option<Value>, PreferenceStoreError> {
        validate_key(key)?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &Value) -> Result<(), PreferenceStoreError> {
        validate_key(key)?;
        self.values
            .write()
            .await
            .insert(key.to_owned(), value.clone());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PreferenceStoreError> {
        validate_key(key)?;
        self.values.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn saved_values_are_loaded_back() {
        let store = InMemoryPreferenceStore::new();
        store
            .save("likedPhotos", &json!([1, 2]))
            .await
            .expect("save");

        let loaded = store.load("likedPhotos").await.expect("load");
        assert_eq!(loaded, Some(json!([1, 2])));
    }

    #[tokio::test]
    async fn removing_an_absent_key_succeeds() {
        let store = InMemoryPreferenceStore::new();
        store.remove("user").await.expect("remove");
        assert_eq!(store.load("user").await.expect("load"), None);
    }

    #[tokio::test]
    async fn rejects_invalid_keys() {
        let store = InMemoryPreferenceStore::new();
        let err = store.load("../etc").await.expect_err("invalid key");
        assert_eq!(err, PreferenceStoreError::invalid_key("../etc"));
    }
}
