//! Photographer data model.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 3;
/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 30;

/// Validation errors returned when constructing photographer values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotographerValidationError {
    /// Username was blank.
    EmptyUsername,
    /// Username shorter than `min` characters.
    UsernameTooShort { min: usize },
    /// Username longer than `max` characters.
    UsernameTooLong { max: usize },
    /// Username held a character that is not alphanumeric or an underscore.
    UsernameInvalidCharacters,
    /// Display name was blank.
    EmptyDisplayName,
}

impl fmt::Display for PhotographerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooShort { min } => {
                write!(f, "username must be at least {min} characters")
            }
            Self::UsernameTooLong { max } => {
                write!(f, "username must be at most {max} characters")
            }
            Self::UsernameInvalidCharacters => write!(
                f,
                "username may only contain letters, numbers, or underscores",
            ),
            Self::EmptyDisplayName => write!(f, "display name must not be empty"),
        }
    }
}

impl std::error::Error for PhotographerValidationError {}

/// Stable photographer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotographerId(u64);

impl PhotographerId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PhotographerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique photographer handle used as a routing key.
///
/// Usernames are normalised to lowercase on construction so equality and
/// hashing are case-insensitive.
///
/// # Examples
/// ```
/// use gallery::domain::Username;
///
/// let a = Username::new("Ada_Lovelace").expect("valid username");
/// let b = Username::new("ada_lovelace").expect("valid username");
/// assert_eq!(a, b);
/// assert_eq!(a.as_ref(), "ada_lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl AsRef<str>) -> Result<Self, PhotographerValidationError> {
        let raw = username.as_ref();
        if raw.trim().is_empty() {
            return Err(PhotographerValidationError::EmptyUsername);
        }

        let length = raw.chars().count();
        if length < USERNAME_MIN {
            return Err(PhotographerValidationError::UsernameTooShort { min: USERNAME_MIN });
        }
        if length > USERNAME_MAX {
            return Err(PhotographerValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(PhotographerValidationError::UsernameInvalidCharacters);
        }

        Ok(Self(raw.to_ascii_lowercase()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = PhotographerValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Follower and portfolio counters shown on a profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotographerStats {
    /// Number of photos in the photographer's portfolio.
    pub photos: u32,
    /// Number of followers.
    pub followers: u32,
    /// Number of accounts the photographer follows.
    pub following: u32,
}

/// A photographer profile.
///
/// ## Invariants
/// - `username` is unique across the catalogue.
/// - `display_name` is non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photographer {
    id: PhotographerId,
    username: Username,
    display_name: String,
    bio: String,
    avatar_url: String,
    cover_url: String,
    location: Option<String>,
    website: Option<String>,
    camera: Option<String>,
    specialties: BTreeSet<String>,
    stats: PhotographerStats,
}

impl Photographer {
    /// Start building a photographer with the required identity fields.
    pub fn builder(id: PhotographerId, username: Username) -> PhotographerBuilder {
        PhotographerBuilder {
            id,
            username,
            display_name: String::new(),
            bio: String::new(),
            avatar_url: String::new(),
            cover_url: String::new(),
            location: None,
            website: None,
            camera: None,
            specialties: BTreeSet::new(),
            stats: PhotographerStats::default(),
        }
    }

    /// Catalogue identifier.
    pub fn id(&self) -> PhotographerId {
        self.id
    }

    /// Unique handle used in profile routes.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Name shown on cards and the profile header.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Short biography.
    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Avatar image URL.
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    /// Profile cover image URL.
    pub fn cover_url(&self) -> &str {
        &self.cover_url
    }

    /// Home city, when given.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Personal website, when given.
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    /// Preferred camera, when given.
    pub fn camera(&self) -> Option<&str> {
        self.camera.as_deref()
    }

    /// Specialty tags.
    pub fn specialties(&self) -> &BTreeSet<String> {
        &self.specialties
    }

    /// Portfolio and follower counts.
    pub fn stats(&self) -> PhotographerStats {
        self.stats
    }
}

/// Builder for [`Photographer`].
#[derive(Debug, Clone)]
pub struct PhotographerBuilder {
    id: PhotographerId,
    username: Username,
    display_name: String,
    bio: String,
    avatar_url: String,
    cover_url: String,
    location: Option<String>,
    website: Option<String>,
    camera: Option<String>,
    specialties: BTreeSet<String>,
    stats: PhotographerStats,
}

impl PhotographerBuilder {
    /// Set the display name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Set the biography.
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// Set the avatar URL.
    pub fn avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = url.into();
        self
    }

    /// Set the cover image URL.
    pub fn cover_url(mut self, url: impl Into<String>) -> Self {
        self.cover_url = url.into();
        self
    }

    /// Set the home city.
    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    /// Set the personal website.
    pub fn website(mut self, website: Option<String>) -> Self {
        self.website = website;
        self
    }

    /// Set the preferred camera.
    pub fn camera(mut self, camera: Option<String>) -> Self {
        self.camera = camera;
        self
    }

    /// Set the specialty tags.
    pub fn specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    /// Set the portfolio and follower counts.
    pub fn stats(mut self, stats: PhotographerStats) -> Self {
        self.stats = stats;
        self
    }

    /// Finish building, validating the display name.
    pub fn build(self) -> Result<Photographer, PhotographerValidationError> {
        if self.display_name.trim().is_empty() {
            return Err(PhotographerValidationError::EmptyDisplayName);
        }
        Ok(Photographer {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            bio: self.bio,
            avatar_url: self.avatar_url,
            cover_url: self.cover_url,
            location: self.location,
            website: self.website,
            camera: self.camera,
            specialties: self.specialties,
            stats: self.stats,
        })
    }
}
