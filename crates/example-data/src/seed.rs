//! Generated photographer and photo seed types.
//!
//! This module defines the output types from dataset generation. These types
//! are independent of gallery domain types to avoid circular dependencies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A generated example photographer record.
///
/// # Example
///
/// ```
/// use example_data::ExamplePhotographerSeed;
///
/// let photographer = ExamplePhotographerSeed {
///     id: 1,
///     username: "adalovelace".to_owned(),
///     display_name: "Ada Lovelace".to_owned(),
///     bio: "Portrait photographer.".to_owned(),
///     avatar_url: "https://images.example.com/avatars/adalovelace.jpg".to_owned(),
///     cover_url: "https://images.example.com/covers/adalovelace.jpg".to_owned(),
///     location: None,
///     website: None,
///     camera: None,
///     specialties: vec!["Portrait".to_owned()],
///     follower_count: 120,
///     following_count: 12,
/// };
///
/// assert_eq!(photographer.username, "adalovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamplePhotographerSeed {
    /// Unique identifier, starting at 1.
    pub id: u64,
    /// Unique lowercase handle used as a routing key.
    pub username: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Short biography.
    pub bio: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Profile cover image URL.
    pub cover_url: String,
    /// Home city and country, when known.
    pub location: Option<String>,
    /// Personal website, when published.
    pub website: Option<String>,
    /// Preferred camera body, when published.
    pub camera: Option<String>,
    /// Specialty tags drawn from the registry.
    pub specialties: Vec<String>,
    /// Number of followers.
    pub follower_count: u32,
    /// Number of accounts followed.
    pub following_count: u32,
}

/// A generated example photo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamplePhotoSeed {
    /// Unique identifier, starting at 1.
    pub id: u64,
    /// Identifier of the owning photographer.
    pub photographer_id: u64,
    /// Photo title.
    pub title: String,
    /// Free-text description mentioning lighting and colour tone.
    pub description: Option<String>,
    /// Display image URL.
    pub url: String,
    /// High-resolution image URL, when available.
    pub high_res_url: Option<String>,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
    /// Camera body used for the shot.
    pub camera: Option<String>,
    /// Where the photo was taken.
    pub location: Option<String>,
    /// When the photo was taken.
    pub taken_on: Option<NaiveDate>,
    /// Exposure settings summary.
    pub settings: Option<String>,
    /// Like counter.
    pub likes: u32,
    /// Save counter.
    pub saves: u32,
    /// Whether the photo is featured by editors.
    pub featured: bool,
}

/// A complete generated dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleDataset {
    /// Generated photographers, ordered by id.
    pub photographers: Vec<ExamplePhotographerSeed>,
    /// Generated photos, ordered by id.
    pub photos: Vec<ExamplePhotoSeed>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_photo_seed_serializes_to_camel_case() {
        let photo = ExamplePhotoSeed {
            id: 1,
            photographer_id: 1,
            title: "Test".to_owned(),
            description: None,
            url: "https://images.example.com/photos/1.jpg".to_owned(),
            high_res_url: None,
            width: 4000,
            height: 6000,
            camera: None,
            location: None,
            taken_on: NaiveDate::from_ymd_opt(2024, 5, 17),
            settings: None,
            likes: 0,
            saves: 0,
            featured: false,
        };
        let json = serde_json::to_string(&photo).expect("serialize");
        assert!(json.contains("photographerId"));
        assert!(json.contains("highResUrl"));
        assert!(json.contains("\"takenOn\":\"2024-05-17\""));
    }

    #[test]
    fn empty_dataset_is_default() {
        let dataset = ExampleDataset::default();
        assert!(dataset.photographers.is_empty());
        assert!(dataset.photos.is_empty());
    }
}
