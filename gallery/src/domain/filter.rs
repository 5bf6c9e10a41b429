//! Filter specification and predicate evaluation.
//!
//! A [`FilterSpec`] constrains the catalogue along independent dimensions.
//! An empty dimension places no constraint. Within a tag dimension any
//! requested tag may match; across dimensions every active constraint must
//! hold.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Orientation, Photo, PhotographerId};

/// Orientation constraint for a filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationFilter {
    /// Any orientation.
    #[default]
    All,
    /// Taller than wide.
    Portrait,
    /// Wider than tall.
    Landscape,
    /// Sides within the square tolerance.
    Square,
}

impl OrientationFilter {
    /// Wire name used in query strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
            Self::Square => "square",
        }
    }

    /// True when `orientation` satisfies this constraint.
    pub fn accepts(self, orientation: Orientation) -> bool {
        match self {
            Self::All => true,
            Self::Portrait => orientation == Orientation::Portrait,
            Self::Landscape => orientation == Orientation::Landscape,
            Self::Square => orientation == Orientation::Square,
        }
    }
}

impl fmt::Display for OrientationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown orientation name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown orientation '{0}'")]
pub struct UnknownOrientation(pub String);

impl FromStr for OrientationFilter {
    type Err = UnknownOrientation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            "square" => Ok(Self::Square),
            _ => Err(UnknownOrientation(s.to_owned())),
        }
    }
}

/// One removable value of a filter, as shown on an "active filter" chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// A single lighting tag.
    Lighting(String),
    /// A single colour-tone tag.
    ColorTone(String),
    /// A single photographer.
    Photographer(PhotographerId),
    /// The orientation constraint.
    Orientation,
    /// The featured-only flag.
    Featured,
    /// The free-text query.
    Query,
}

/// Search and browse constraints.
///
/// Tags are stored trimmed and lowercased so that set membership and
/// matching are case-insensitive. Blank tags are ignored.
///
/// # Examples
/// ```
/// use gallery::domain::{FilterSpec, OrientationFilter};
///
/// let filter = FilterSpec::default()
///     .with_lighting("Dramatic")
///     .with_orientation(OrientationFilter::Portrait);
/// assert_eq!(filter.active_filter_count(), 2);
/// assert!(filter.lighting().contains("dramatic"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    lighting: BTreeSet<String>,
    color_tone: BTreeSet<String>,
    photographer: BTreeSet<PhotographerId>,
    orientation: OrientationFilter,
    query: Option<String>,
    featured: bool,
}

fn normalise_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

impl FilterSpec {
    /// Filter restricted to a single photographer's work.
    pub fn for_photographer(id: PhotographerId) -> Self {
        Self::default().with_photographer(id)
    }

    /// Filter restricted to featured photos.
    pub fn featured_only() -> Self {
        Self::default().with_featured(true)
    }

    /// Builder form of [`FilterSpec::add_lighting`].
    pub fn with_lighting(mut self, tag: &str) -> Self {
        self.add_lighting(tag);
        self
    }

    /// Builder form of [`FilterSpec::add_color_tone`].
    pub fn with_color_tone(mut self, tag: &str) -> Self {
        self.add_color_tone(tag);
        self
    }

    /// Builder form of [`FilterSpec::add_photographer`].
    pub fn with_photographer(mut self, id: PhotographerId) -> Self {
        self.photographer.insert(id);
        self
    }

    /// Builder form of [`FilterSpec::set_orientation`].
    pub fn with_orientation(mut self, orientation: OrientationFilter) -> Self {
        self.orientation = orientation;
        self
    }

    /// Builder form of [`FilterSpec::set_query`].
    pub fn with_query(mut self, query: &str) -> Self {
        self.set_query(query);
        self
    }

    /// Builder form of [`FilterSpec::set_featured`].
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Add a lighting tag, returning whether it was newly inserted.
    pub fn add_lighting(&mut self, tag: &str) -> bool {
        normalise_tag(tag).is_some_and(|t| self.lighting.insert(t))
    }

    /// Add a colour-tone tag, returning whether it was newly inserted.
    pub fn add_color_tone(&mut self, tag: &str) -> bool {
        normalise_tag(tag).is_some_and(|t| self.color_tone.insert(t))
    }

    /// Add a photographer, returning whether it was newly inserted.
    pub fn add_photographer(&mut self, id: PhotographerId) -> bool {
        self.photographer.insert(id)
    }

    /// Replace the orientation constraint.
    pub fn set_orientation(&mut self, orientation: OrientationFilter) {
        self.orientation = orientation;
    }

    /// Set the free-text query. A blank query clears it.
    pub fn set_query(&mut self, query: &str) {
        let trimmed = query.trim();
        self.query = (!trimmed.is_empty()).then(|| trimmed.to_owned());
    }

    /// Restrict to featured photos, or lift that restriction.
    pub fn set_featured(&mut self, featured: bool) {
        self.featured = featured;
    }

    /// Lighting tags; a photo must carry at least one when non-empty.
    pub fn lighting(&self) -> &BTreeSet<String> {
        &self.lighting
    }

    /// Colour-tone tags; a photo must carry at least one when non-empty.
    pub fn color_tone(&self) -> &BTreeSet<String> {
        &self.color_tone
    }

    /// Photographers whose work is accepted when non-empty.
    pub fn photographer(&self) -> &BTreeSet<PhotographerId> {
        &self.photographer
    }

    /// Orientation constraint.
    pub fn orientation(&self) -> OrientationFilter {
        self.orientation
    }

    /// Normalised free-text query, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// True when only featured photos match.
    pub fn featured(&self) -> bool {
        self.featured
    }

    /// True when no dimension constrains the catalogue.
    pub fn is_empty(&self) -> bool {
        self.lighting.is_empty()
            && self.color_tone.is_empty()
            && self.photographer.is_empty()
            && self.orientation == OrientationFilter::All
            && self.query.is_none()
            && !self.featured
    }

    /// Number of removable filter chips, excluding the free-text query.
    pub fn active_filter_count(&self) -> usize {
        self.lighting.len()
            + self.color_tone.len()
            + self.photographer.len()
            + usize::from(self.orientation != OrientationFilter::All)
            + usize::from(self.featured)
    }

    /// Remove a single value, returning whether anything changed.
    pub fn remove(&mut self, value: &FilterValue) -> bool {
        match value {
            FilterValue::Lighting(tag) => normalise_tag(tag).is_some_and(|t| self.lighting.remove(&t)),
            FilterValue::ColorTone(tag) => {
                normalise_tag(tag).is_some_and(|t| self.color_tone.remove(&t))
            }
            FilterValue::Photographer(id) => self.photographer.remove(id),
            FilterValue::Orientation => {
                let changed = self.orientation != OrientationFilter::All;
                self.orientation = OrientationFilter::All;
                changed
            }
            FilterValue::Featured => std::mem::replace(&mut self.featured, false),
            FilterValue::Query => self.query.take().is_some(),
        }
    }

    /// Clear every filter dimension while keeping the free-text query.
    pub fn clear_filters(&mut self) {
        let query = self.query.take();
        *self = Self {
            query,
            ..Self::default()
        };
    }

    /// Evaluate the predicate against a photo. Pure.
    pub fn matches(&self, photo: &Photo) -> bool {
        let description = photo.description().map(str::to_lowercase);

        any_tag_in(&self.lighting, description.as_deref())
            && any_tag_in(&self.color_tone, description.as_deref())
            && (self.photographer.is_empty() || self.photographer.contains(&photo.photographer_id()))
            && self.orientation.accepts(photo.orientation())
            && (!self.featured || photo.is_featured())
            && self.matches_query(photo, description.as_deref())
    }

    fn matches_query(&self, photo: &Photo, description: Option<&str>) -> bool {
        let Some(query) = self.query.as_deref() else {
            return true;
        };
        let needle = query.to_lowercase();
        photo.title().to_lowercase().contains(&needle)
            || description.is_some_and(|d| d.contains(&needle))
    }
}

/// Empty tag sets match everything; otherwise the lowercased text must
/// contain at least one tag.
fn any_tag_in(tags: &BTreeSet<String>, text: Option<&str>) -> bool {
    if tags.is_empty() {
        return true;
    }
    text.is_some_and(|t| tags.iter().any(|tag| t.contains(tag.as_str())))
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::{Dimensions, PhotoId};

    fn photo(
        id: u64,
        owner: u64,
        (width, height): (u32, u32),
        description: Option<&str>,
        featured: bool,
    ) -> Photo {
        let dims = Dimensions::new(width, height).expect("non-zero");
        Photo::builder(PhotoId::new(id), PhotographerId::new(owner), dims)
            .title(format!("Photo {id}"))
            .url(format!("https://images.example.com/photos/{id}.jpg"))
            .description(description.map(str::to_owned))
            .featured(featured)
            .build()
            .expect("valid photo")
    }

    #[fixture]
    fn catalogue() -> Vec<Photo> {
        vec![
            photo(1, 1, (4000, 6000), Some("A Dramatic portrait with warm tones"), true),
            photo(2, 1, (6000, 4000), Some("A soft portrait with cool tones"), false),
            photo(3, 2, (3000, 3000), Some("A natural portrait with monochrome tones"), false),
            photo(4, 2, (4000, 6000), None, true),
        ]
    }

    fn ids(catalogue: &[Photo], filter: &FilterSpec) -> Vec<u64> {
        catalogue
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.id().get())
            .collect()
    }

    #[rstest]
    fn empty_filter_matches_everything(catalogue: Vec<Photo>) {
        assert_eq!(ids(&catalogue, &FilterSpec::default()), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn lighting_matches_description_case_insensitively(catalogue: Vec<Photo>) {
        let filter = FilterSpec::default().with_lighting("DRAMATIC");
        assert_eq!(ids(&catalogue, &filter), vec![1]);
    }

    #[rstest]
    fn tags_within_a_dimension_are_alternatives(catalogue: Vec<Photo>) {
        let filter = FilterSpec::default()
            .with_lighting("dramatic")
            .with_lighting("soft");
        assert_eq!(ids(&catalogue, &filter), vec![1, 2]);
    }

    #[rstest]
    fn dimensions_are_combined_with_and(catalogue: Vec<Photo>) {
        let filter = FilterSpec::default()
            .with_lighting("soft")
            .with_color_tone("warm");
        assert!(ids(&catalogue, &filter).is_empty());
    }

    #[rstest]
    fn records_without_description_never_match_tags(catalogue: Vec<Photo>) {
        let filter = FilterSpec::default().with_color_tone("warm");
        assert!(!ids(&catalogue, &filter).contains(&4));
    }

    #[rstest]
    #[case(OrientationFilter::All, vec![1, 2, 3, 4])]
    #[case(OrientationFilter::Portrait, vec![1, 4])]
    #[case(OrientationFilter::Landscape, vec![2])]
    #[case(OrientationFilter::Square, vec![3])]
    fn orientation_uses_dimensions(
        catalogue: Vec<Photo>,
        #[case] orientation: OrientationFilter,
        #[case] expected: Vec<u64>,
    ) {
        let filter = FilterSpec::default().with_orientation(orientation);
        assert_eq!(ids(&catalogue, &filter), expected);
    }

    #[rstest]
    fn query_matches_title_or_description(catalogue: Vec<Photo>) {
        assert_eq!(ids(&catalogue, &FilterSpec::default().with_query("photo 3")), vec![3]);
        assert_eq!(ids(&catalogue, &FilterSpec::default().with_query("COOL")), vec![2]);
    }

    #[rstest]
    fn blank_query_is_no_constraint(catalogue: Vec<Photo>) {
        let filter = FilterSpec::default().with_query("   ");
        assert!(filter.is_empty());
        assert_eq!(ids(&catalogue, &filter).len(), 4);
    }

    #[rstest]
    fn photographer_and_featured_constraints(catalogue: Vec<Photo>) {
        let filter = FilterSpec::for_photographer(PhotographerId::new(2)).with_featured(true);
        assert_eq!(ids(&catalogue, &filter), vec![4]);
    }

    #[test]
    fn active_filter_count_ignores_query() {
        let filter = FilterSpec::default()
            .with_lighting("soft")
            .with_color_tone("warm")
            .with_color_tone("cool")
            .with_orientation(OrientationFilter::Square)
            .with_query("gaze");
        assert_eq!(filter.active_filter_count(), 4);
    }

    #[test]
    fn remove_drops_a_single_value() {
        let mut filter = FilterSpec::default()
            .with_lighting("soft")
            .with_lighting("dramatic");
        assert!(filter.remove(&FilterValue::Lighting("Soft".to_owned())));
        assert!(!filter.remove(&FilterValue::Lighting("soft".to_owned())));
        assert_eq!(filter.lighting().len(), 1);
    }

    #[test]
    fn clear_filters_keeps_query() {
        let mut filter = FilterSpec::featured_only()
            .with_lighting("soft")
            .with_orientation(OrientationFilter::Portrait)
            .with_query("gaze");
        filter.clear_filters();
        assert_eq!(filter, FilterSpec::default().with_query("gaze"));
    }

    #[rstest]
    #[case("portrait", OrientationFilter::Portrait)]
    #[case("Landscape", OrientationFilter::Landscape)]
    #[case("", OrientationFilter::All)]
    fn parses_orientation(#[case] raw: &str, #[case] expected: OrientationFilter) {
        assert_eq!(raw.parse::<OrientationFilter>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_orientation() {
        assert_eq!(
            "diagonal".parse::<OrientationFilter>(),
            Err(UnknownOrientation("diagonal".to_owned()))
        );
    }
}
