//! Photo data model.
//!
//! Photos are immutable for the lifetime of a browsing session. Orientation
//! is derived from the real pixel dimensions rather than stored.

use std::fmt;
use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PhotographerId;

/// Relative tolerance, in percent of the longer side, within which a frame
/// counts as square.
pub const SQUARE_TOLERANCE_PERCENT: u64 = 5;

/// Validation errors returned when constructing photo values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoValidationError {
    /// Width or height was zero.
    ZeroDimension,
    /// Title was blank.
    EmptyTitle,
    /// Display URL was blank.
    EmptyUrl,
}

impl fmt::Display for PhotoValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "photo width and height must be non-zero"),
            Self::EmptyTitle => write!(f, "photo title must not be empty"),
            Self::EmptyUrl => write!(f, "photo url must not be empty"),
        }
    }
}

impl std::error::Error for PhotoValidationError {}

/// Stable photo identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(u64);

impl PhotoId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Frame orientation derived from pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Taller than wide.
    Portrait,
    /// Wider than tall.
    Landscape,
    /// Sides within the square tolerance.
    Square,
}

/// Pixel dimensions of a photo. Both sides are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions", into = "RawDimensions")]
pub struct Dimensions {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl Dimensions {
    /// Validate and construct dimensions.
    ///
    /// # Examples
    /// ```
    /// use gallery::domain::{Dimensions, Orientation};
    ///
    /// let dims = Dimensions::new(4000, 6000).expect("non-zero sides");
    /// assert_eq!(dims.orientation(), Orientation::Portrait);
    /// assert!(Dimensions::new(0, 10).is_err());
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, PhotoValidationError> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(PhotoValidationError::ZeroDimension),
        }
    }

    /// Width in pixels.
    pub fn width(self) -> u32 {
        self.width.get()
    }

    /// Height in pixels.
    pub fn height(self) -> u32 {
        self.height.get()
    }

    /// Classify the frame.
    ///
    /// A frame is square when its sides differ by at most
    /// [`SQUARE_TOLERANCE_PERCENT`] of the longer side; otherwise it is
    /// landscape when wider than tall and portrait when taller.
    pub fn orientation(self) -> Orientation {
        let width = u64::from(self.width());
        let height = u64::from(self.height());
        let longer = width.max(height);
        if width.abs_diff(height) * 100 <= longer * SQUARE_TOLERANCE_PERCENT {
            Orientation::Square
        } else if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawDimensions {
    width: u32,
    height: u32,
}

impl From<Dimensions> for RawDimensions {
    fn from(value: Dimensions) -> Self {
        Self {
            width: value.width(),
            height: value.height(),
        }
    }
}

impl TryFrom<RawDimensions> for Dimensions {
    type Error = PhotoValidationError;

    fn try_from(value: RawDimensions) -> Result<Self, Self::Error> {
        Self::new(value.width, value.height)
    }
}

/// Optional shooting metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoMetadata {
    /// Camera body and lens.
    pub camera: Option<String>,
    /// Where the photo was taken.
    pub location: Option<String>,
    /// Day the photo was taken.
    pub taken_on: Option<NaiveDate>,
    /// Exposure settings as free text.
    pub settings: Option<String>,
}

impl PhotoMetadata {
    /// True when no metadata field is populated.
    pub fn is_empty(&self) -> bool {
        self.camera.is_none()
            && self.location.is_none()
            && self.taken_on.is_none()
            && self.settings.is_none()
    }
}

/// A photo in the catalogue.
///
/// ## Invariants
/// - `title` and `url` are non-empty once trimmed.
/// - `dimensions` has non-zero sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    id: PhotoId,
    title: String,
    photographer_id: PhotographerId,
    url: String,
    high_res_url: Option<String>,
    description: Option<String>,
    metadata: PhotoMetadata,
    dimensions: Dimensions,
    likes: u32,
    saves: u32,
    featured: bool,
}

impl Photo {
    /// Start building a photo.
    pub fn builder(
        id: PhotoId,
        photographer_id: PhotographerId,
        dimensions: Dimensions,
    ) -> PhotoBuilder {
        PhotoBuilder {
            id,
            photographer_id,
            dimensions,
            title: String::new(),
            url: String::new(),
            high_res_url: None,
            description: None,
            metadata: PhotoMetadata::default(),
            likes: 0,
            saves: 0,
            featured: false,
        }
    }

    /// Catalogue identifier.
    pub fn id(&self) -> PhotoId {
        self.id
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Photographer who took the photo.
    pub fn photographer_id(&self) -> PhotographerId {
        self.photographer_id
    }

    /// URL used for thumbnails and cards.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// High resolution URL, falling back to the display URL.
    pub fn full_resolution_url(&self) -> &str {
        self.high_res_url.as_deref().unwrap_or(&self.url)
    }

    /// High resolution URL, when one is published.
    pub fn high_res_url(&self) -> Option<&str> {
        self.high_res_url.as_deref()
    }

    /// Optional long-form description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Capture metadata.
    pub fn metadata(&self) -> &PhotoMetadata {
        &self.metadata
    }

    /// Pixel dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Orientation derived from the dimensions.
    pub fn orientation(&self) -> Orientation {
        self.dimensions.orientation()
    }

    /// Like count shown on the card.
    pub fn likes(&self) -> u32 {
        self.likes
    }

    /// Save count shown on the card.
    pub fn saves(&self) -> u32 {
        self.saves
    }

    /// True when the photo belongs to the featured set.
    pub fn is_featured(&self) -> bool {
        self.featured
    }
}

/// Builder for [`Photo`].
#[derive(Debug, Clone)]
pub struct PhotoBuilder {
    id: PhotoId,
    photographer_id: PhotographerId,
    dimensions: Dimensions,
    title: String,
    url: String,
    high_res_url: Option<String>,
    description: Option<String>,
    metadata: PhotoMetadata,
    likes: u32,
    saves: u32,
    featured: bool,
}

impl PhotoBuilder {
    /// Set the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the display URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the high resolution URL.
    pub fn high_res_url(mut self, url: Option<String>) -> Self {
        self.high_res_url = url;
        self
    }

    /// Set the long-form description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Set the capture metadata.
    pub fn metadata(mut self, metadata: PhotoMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the like count.
    pub fn likes(mut self, likes: u32) -> Self {
        self.likes = likes;
        self
    }

    /// Set the save count.
    pub fn saves(mut self, saves: u32) -> Self {
        self.saves = saves;
        self
    }

    /// Mark the photo as featured.
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Finish building, validating title and URL.
    pub fn build(self) -> Result<Photo, PhotoValidationError> {
        if self.title.trim().is_empty() {
            return Err(PhotoValidationError::EmptyTitle);
        }
        if self.url.trim().is_empty() {
            return Err(PhotoValidationError::EmptyUrl);
        }
        Ok(Photo {
            id: self.id,
            title: self.title,
            photographer_id: self.photographer_id,
            url: self.url,
            high_res_url: self.high_res_url,
            description: self.description,
            metadata: self.metadata,
            dimensions: self.dimensions,
            likes: self.likes,
            saves: self.saves,
            featured: self.featured,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::portrait(4000, 6000, Orientation::Portrait)]
    #[case::landscape(6000, 4000, Orientation::Landscape)]
    #[case::exact_square(3000, 3000, Orientation::Square)]
    #[case::within_tolerance(1000, 950, Orientation::Square)]
    #[case::just_outside_tolerance(1000, 949, Orientation::Landscape)]
    #[case::tall_within_tolerance(960, 1000, Orientation::Square)]
    fn classifies_orientation(
        #[case] width: u32,
        #[case] height: u32,
        #[case] expected: Orientation,
    ) {
        let dims = Dimensions::new(width, height).expect("non-zero");
        assert_eq!(dims.orientation(), expected);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 0)]
    fn rejects_zero_dimensions(#[case] width: u32, #[case] height: u32) {
        assert_eq!(
            Dimensions::new(width, height),
            Err(PhotoValidationError::ZeroDimension)
        );
    }

    fn sample() -> PhotoBuilder {
        let dims = Dimensions::new(4000, 6000).expect("non-zero");
        Photo::builder(PhotoId::new(1), PhotographerId::new(1), dims)
            .title("Quiet Gaze")
            .url("https://images.example.com/photos/1.jpg")
    }

    #[test]
    fn builder_rejects_blank_title() {
        assert_eq!(
            sample().title("  ").build(),
            Err(PhotoValidationError::EmptyTitle)
        );
    }

    #[test]
    fn full_resolution_falls_back_to_display_url() {
        let photo = sample().build().expect("valid photo");
        assert_eq!(photo.full_resolution_url(), photo.url());

        let hi_res = sample()
            .high_res_url(Some("https://images.example.com/photos/1@full.jpg".to_owned()))
            .build()
            .expect("valid photo");
        assert!(hi_res.full_resolution_url().ends_with("@full.jpg"));
    }

    #[test]
    fn dimensions_deserialisation_rejects_zero() {
        let result: Result<Dimensions, _> =
            serde_json::from_str(r#"{"width": 0, "height": 100}"#);
        assert!(result.is_err());
    }
}
