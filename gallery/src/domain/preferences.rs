//! Per-user browsing preferences: identity, likes, and saves.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{PhotoId, Username};

/// Storage name for the signed-in user record.
pub const USER_KEY: &str = "user";
/// Storage name for the liked photo id set.
pub const LIKED_PHOTOS_KEY: &str = "likedPhotos";
/// Storage name for the saved photo id set.
pub const SAVED_PHOTOS_KEY: &str = "savedPhotos";

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Account handle.
    pub username: Username,
    /// Name shown in the header.
    pub display_name: String,
}

/// Snapshot of a visitor's preference state.
///
/// ## Invariants
/// - Liked and saved sets hold each photo id at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    user: Option<SessionUser>,
    liked_photos: BTreeSet<PhotoId>,
    saved_photos: BTreeSet<PhotoId>,
}

impl UserPreferences {
    /// Assemble preferences from their stored parts.
    pub fn new(
        user: Option<SessionUser>,
        liked_photos: BTreeSet<PhotoId>,
        saved_photos: BTreeSet<PhotoId>,
    ) -> Self {
        Self {
            user,
            liked_photos,
            saved_photos,
        }
    }

    /// Signed-in user, if any.
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// True when a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Photos the user liked.
    pub fn liked_photos(&self) -> &BTreeSet<PhotoId> {
        &self.liked_photos
    }

    /// Photos the user saved.
    pub fn saved_photos(&self) -> &BTreeSet<PhotoId> {
        &self.saved_photos
    }

    /// True when `id` is liked.
    pub fn is_liked(&self, id: PhotoId) -> bool {
        self.liked_photos.contains(&id)
    }

    /// True when `id` is saved.
    pub fn is_saved(&self, id: PhotoId) -> bool {
        self.saved_photos.contains(&id)
    }

    pub(crate) fn set_user(&mut self, user: Option<SessionUser>) {
        self.user = user;
    }

    /// Flip like membership, returning the new state.
    pub(crate) fn toggle_like(&mut self, id: PhotoId) -> bool {
        toggle(&mut self.liked_photos, id)
    }

    /// Flip save membership, returning the new state.
    pub(crate) fn toggle_save(&mut self, id: PhotoId) -> bool {
        toggle(&mut self.saved_photos, id)
    }
}

fn toggle(set: &mut BTreeSet<PhotoId>, id: PhotoId) -> bool {
    if set.remove(&id) {
        false
    } else {
        set.insert(id);
        true
    }
}
