//! User preference service: sign-in state, likes, and saves.
//!
//! State is persisted through the [`PreferenceStore`] port under the fixed
//! names [`USER_KEY`], [`LIKED_PHOTOS_KEY`], and [`SAVED_PHOTOS_KEY`]. A
//! stored value that cannot be parsed, or parses to the wrong shape, is
//! treated as absent and is replaced by the next write.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::ports::{PreferenceStore, PreferenceStoreError};
use super::{
    Error, LIKED_PHOTOS_KEY, PhotoId, SAVED_PHOTOS_KEY, SessionUser, USER_KEY, UserPreferences,
    Username,
};

/// Preference operations backed by a store.
pub struct UserPreferencesService<S> {
    store: Arc<S>,
}

impl<S> Clone for UserPreferencesService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> UserPreferencesService<S> {
    /// Create a service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> UserPreferencesService<S>
where
    S: PreferenceStore,
{
    fn map_store_error(error: PreferenceStoreError) -> Error {
        match error {
            PreferenceStoreError::InvalidKey { key } => {
                Error::internal(format!("invalid preference key: {key}"))
            }
            other => Error::internal(format!("preference store error: {other}")),
        }
    }

    async fn read<T>(&self, key: &str) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned,
    {
        let value = match self.store.load(key).await {
            Ok(Some(value)) => value,
            Ok(None) => return Ok(None),
            Err(PreferenceStoreError::Serialization { message }) => {
                warn!(key, error = %message, "ignoring unreadable preference value");
                return Ok(None);
            }
            Err(error) => return Err(Self::map_store_error(error)),
        };
        match serde_json::from_value(value) {
            Ok(decoded) => Ok(Some(decoded)),
            Err(error) => {
                warn!(key, error = %error, "ignoring undecodable preference value");
                Ok(None)
            }
        }
    }

    async fn write<T>(&self, key: &str, value: &T) -> Result<(), Error>
    where
        T: Serialize + Sync,
    {
        let encoded = serde_json::to_value(value)
            .map_err(|err| Error::internal(format!("failed to encode {key}: {err}")))?;
        self.store
            .save(key, &encoded)
            .await
            .map_err(Self::map_store_error)
    }

    /// Load the full preference snapshot.
    pub async fn load(&self) -> Result<UserPreferences, Error> {
        let user = self.read::<SessionUser>(USER_KEY).await?;
        let liked = self
            .read::<BTreeSet<PhotoId>>(LIKED_PHOTOS_KEY)
            .await?
            .unwrap_or_default();
        let saved = self
            .read::<BTreeSet<PhotoId>>(SAVED_PHOTOS_KEY)
            .await?
            .unwrap_or_default();
        Ok(UserPreferences::new(user, liked, saved))
    }

    /// Sign in as `username`.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` when the username or display name is invalid.
    pub async fn login(&self, username: &str, display_name: &str) -> Result<UserPreferences, Error> {
        let username = Username::new(username)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        if display_name.trim().is_empty() {
            return Err(Error::invalid_request("display name must not be empty"));
        }
        let user = SessionUser {
            username,
            display_name: display_name.trim().to_owned(),
        };
        self.write(USER_KEY, &user).await?;
        info!(username = %user.username, "user signed in");

        let mut preferences = self.load().await?;
        preferences.set_user(Some(user));
        Ok(preferences)
    }

    /// Sign out, keeping likes and saves.
    pub async fn logout(&self) -> Result<UserPreferences, Error> {
        self.store
            .remove(USER_KEY)
            .await
            .map_err(Self::map_store_error)?;
        info!("user signed out");
        let mut preferences = self.load().await?;
        preferences.set_user(None);
        Ok(preferences)
    }

    /// Flip whether `id` is liked, returning the new state.
    pub async fn toggle_like(&self, id: PhotoId) -> Result<bool, Error> {
        let mut preferences = self.load().await?;
        let liked = preferences.toggle_like(id);
        self.write(LIKED_PHOTOS_KEY, preferences.liked_photos()).await?;
        Ok(liked)
    }

    /// Flip whether `id` is saved, returning the new state.
    pub async fn toggle_save(&self, id: PhotoId) -> Result<bool, Error> {
        let mut preferences = self.load().await?;
        let saved = preferences.toggle_save(id);
        self.write(SAVED_PHOTOS_KEY, preferences.saved_photos()).await?;
        Ok(saved)
    }

    pub async fn is_photo_liked(&self, id: PhotoId) -> Result<bool, Error> {
        Ok(self.load().await?.is_liked(id))
    }

    pub async fn is_photo_saved(&self, id: PhotoId) -> Result<bool, Error> {
        Ok(self.load().await?.is_saved(id))
    }
}
