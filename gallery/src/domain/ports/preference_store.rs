//! Port for persisting named preference values.
//!
//! Values are stored as JSON under short fixed names (see
//! [`crate::domain::USER_KEY`] and friends). Adapters decide where the bytes
//! live.

use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;

define_port_error! {
    /// Errors raised by preference store adapters.
    pub enum PreferenceStoreError {
        /// Reading or writing the backing storage failed.
        Io { message: String } => "preference store I/O failed: {message}",
        /// A stored value could not be encoded or decoded.
        Serialization { message: String } =>
            "preference store serialization failed: {message}",
        /// The key cannot be used as a storage name.
        InvalidKey { key: String } => "invalid preference key: {key}",
    }
}

/// Named JSON value storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Load the value stored under `key`, or `None` when absent.
    async fn load(&self, key: &str) -> Result<Option<Value>, PreferenceStoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn save(&self, key: &str, value: &Value) -> Result<(), PreferenceStoreError>;

    /// Remove the value stored under `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<(), PreferenceStoreError>;
}

/// Check that `key` is usable as a storage name on every adapter.
///
/// Keys are non-empty ASCII alphanumerics, optionally with `-` or `_`.
pub fn validate_key(key: &str) -> Result<(), PreferenceStoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(PreferenceStoreError::invalid_key(key))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::{LIKED_PHOTOS_KEY, SAVED_PHOTOS_KEY, USER_KEY};

    #[rstest]
    #[case(USER_KEY)]
    #[case(LIKED_PHOTOS_KEY)]
    #[case(SAVED_PHOTOS_KEY)]
    fn fixed_storage_names_are_valid(#[case] key: &str) {
        assert_eq!(validate_key(key), Ok(()));
    }

    #[rstest]
    #[case("")]
    #[case("../escape")]
    #[case("with space")]
    #[case("nested/key")]
    fn rejects_unsafe_keys(#[case] key: &str) {
        assert_eq!(
            validate_key(key),
            Err(PreferenceStoreError::invalid_key(key))
        );
    }
}
