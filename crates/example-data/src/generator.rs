//! Deterministic photographer and photo generation from seed definitions.
//!
//! This module provides the core generation function that produces
//! reproducible gallery data from a seed registry. The same seed value always
//! produces identical output.

use std::collections::HashSet;

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::address::raw::{CityName, CountryName};
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::registry::{SeedDefinition, SeedRegistry};
use crate::seed::{ExampleDataset, ExamplePhotoSeed, ExamplePhotographerSeed};
use crate::validation::{
    DISPLAY_NAME_MAX, USERNAME_MIN, is_valid_display_name, is_valid_username,
    sanitize_display_name, username_stem,
};

/// Maximum number of attempts to generate a valid display name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Maximum number of numeric suffixes tried when deduplicating usernames.
const MAX_USERNAME_ATTEMPTS: usize = 50;

/// Minimum number of specialties to assign to a photographer.
const MIN_SPECIALTIES: usize = 1;

/// Maximum number of specialties to assign to a photographer.
const MAX_SPECIALTIES: usize = 3;

const IMAGE_HOST: &str = "https://images.example.com";

const CAMERAS: &[&str] = &[
    "Canon EOS R5",
    "Sony A7 IV",
    "Nikon Z7 II",
    "Fujifilm X-T5",
    "Leica Q2",
    "Hasselblad X2D",
];

const TITLE_ADJECTIVES: &[&str] = &[
    "Quiet", "Golden", "Fleeting", "Silent", "Hidden", "Amber", "Distant", "Gentle",
];

const TITLE_NOUNS: &[&str] = &[
    "Gaze", "Reverie", "Threshold", "Portrait", "Reflection", "Profile", "Study", "Moment",
];

const SETTINGS: &[&str] = &[
    "f/1.8, 1/200s, ISO 100",
    "f/2.8, 1/125s, ISO 400",
    "f/4, 1/60s, ISO 800",
    "f/1.4, 1/500s, ISO 200",
];

/// Width and height presets covering portrait, landscape, and square frames.
const DIMENSION_PRESETS: &[(u32, u32)] = &[
    (4000, 6000),
    (3000, 4500),
    (6000, 4000),
    (5472, 3648),
    (4000, 4000),
    (3000, 3000),
];

/// Probability that a photo carries a description (9 in 10).
const DESCRIPTION_NUMERATOR: u32 = 9;
const DESCRIPTION_DENOMINATOR: u32 = 10;

/// Probability that a photo is featured (1 in 5).
const FEATURED_NUMERATOR: u32 = 1;
const FEATURED_DENOMINATOR: u32 = 5;

/// Generates an example dataset from a seed definition.
///
/// Uses the seed's `seed` value to initialise a deterministic RNG, ensuring
/// identical output for the same seed definition. The generated data has:
///
/// - Photographers with sequential ids, valid display names, and unique
///   lowercase usernames
/// - `photos_per_photographer` photos for each photographer, numbered in
///   photographer order
/// - Descriptions naming one lighting tag and one colour-tone tag from the
///   registry
///
/// # Errors
///
/// Returns [`GenerationError`] if a valid display name or a unique username
/// cannot be produced within the retry limits.
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_dataset};
///
/// let json = r#"{
///     "version": 1,
///     "lightingTags": ["dramatic"],
///     "colorToneTags": ["warm"],
///     "specialties": ["Portrait"],
///     "seeds": [{"name": "test", "seed": 42, "photographerCount": 3, "photosPerPhotographer": 2}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("test").expect("found");
/// let dataset = generate_example_dataset(&registry, seed_def).expect("generated");
///
/// assert_eq!(dataset.photographers.len(), 3);
/// // Same seed produces an identical dataset
/// let again = generate_example_dataset(&registry, seed_def).expect("generated");
/// assert_eq!(dataset, again);
/// ```
pub fn generate_example_dataset(
    registry: &SeedRegistry,
    seed_def: &SeedDefinition,
) -> Result<ExampleDataset, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let mut usernames = HashSet::new();
    let mut photographers = Vec::with_capacity(seed_def.photographer_count());
    let mut photos = Vec::with_capacity(
        seed_def
            .photographer_count()
            .saturating_mul(seed_def.photos_per_photographer()),
    );

    for photographer_id in (1_u64..).take(seed_def.photographer_count()) {
        let photographer =
            generate_photographer(&mut rng, registry, photographer_id, &mut usernames)?;
        for _ in 0..seed_def.photos_per_photographer() {
            let photo_id = next_id(photos.len());
            photos.push(generate_photo(
                &mut rng,
                registry,
                photo_id,
                &photographer,
            ));
        }
        photographers.push(photographer);
    }

    Ok(ExampleDataset {
        photographers,
        photos,
    })
}

fn next_id(len: usize) -> u64 {
    u64::try_from(len).map_or(u64::MAX, |n| n.saturating_add(1))
}

fn generate_photographer(
    rng: &mut ChaCha8Rng,
    registry: &SeedRegistry,
    id: u64,
    taken: &mut HashSet<String>,
) -> Result<ExamplePhotographerSeed, GenerationError> {
    let display_name = generate_display_name(rng)?;
    let username = derive_username(&display_name, taken)?;

    let city: String = CityName(EN).fake_with_rng(rng);
    let country: String = CountryName(EN).fake_with_rng(rng);
    let location = rng.random_bool(0.8).then(|| format!("{city}, {country}"));
    let website = rng
        .random_bool(0.5)
        .then(|| format!("https://{username}.example.com"));
    let camera = pick(rng, CAMERAS).map(str::to_owned);

    let specialties = select_subset(rng, registry.specialties(), MIN_SPECIALTIES, MAX_SPECIALTIES);
    let lead = specialties
        .first()
        .map_or_else(|| "Visual".to_owned(), Clone::clone);
    let bio = format!("{lead} photographer chasing light and honest expressions.");

    Ok(ExamplePhotographerSeed {
        id,
        avatar_url: format!("{IMAGE_HOST}/avatars/{username}.jpg"),
        cover_url: format!("{IMAGE_HOST}/covers/{username}.jpg"),
        username,
        display_name,
        bio,
        location,
        website,
        camera,
        specialties,
        follower_count: rng.random_range(50..=25_000),
        following_count: rng.random_range(10..=800),
    })
}

fn generate_photo(
    rng: &mut ChaCha8Rng,
    registry: &SeedRegistry,
    id: u64,
    photographer: &ExamplePhotographerSeed,
) -> ExamplePhotoSeed {
    let adjective = pick(rng, TITLE_ADJECTIVES).unwrap_or("Untitled");
    let noun = pick(rng, TITLE_NOUNS).unwrap_or("Frame");
    let title = format!("{adjective} {noun}");

    let lighting = pick_owned(rng, registry.lighting_tags());
    let tone = pick_owned(rng, registry.color_tone_tags());
    let description = rng
        .random_ratio(DESCRIPTION_NUMERATOR, DESCRIPTION_DENOMINATOR)
        .then(|| format!("A {lighting} portrait with {tone} tones and a quiet, considered mood."));

    let (width, height) = pick(rng, DIMENSION_PRESETS).unwrap_or((4000, 6000));
    let taken_on = NaiveDate::from_ymd_opt(
        rng.random_range(2019..=2025),
        rng.random_range(1..=12),
        rng.random_range(1..=28),
    );
    let has_high_res = rng.random_bool(0.7);

    ExamplePhotoSeed {
        id,
        photographer_id: photographer.id,
        title,
        description,
        url: format!("{IMAGE_HOST}/photos/{id}.jpg"),
        high_res_url: has_high_res.then(|| format!("{IMAGE_HOST}/photos/{id}@full.jpg")),
        width,
        height,
        camera: photographer.camera.clone(),
        location: photographer.location.clone(),
        taken_on,
        settings: pick(rng, SETTINGS).map(str::to_owned),
        likes: rng.random_range(0..=5_000),
        saves: rng.random_range(0..=1_200),
        featured: rng.random_ratio(FEATURED_NUMERATOR, FEATURED_DENOMINATOR),
    }
}

/// Generates a valid display name using the provided RNG.
///
/// Names are built as first name followed by last name, sanitized to remove
/// invalid characters, and truncated to the maximum length.
fn generate_display_name(rng: &mut ChaCha8Rng) -> Result<String, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);
        let sanitized = sanitize_display_name(&format!("{first} {last}"));
        let truncated: String = sanitized.chars().take(DISPLAY_NAME_MAX).collect();

        if is_valid_display_name(&truncated) {
            return Ok(truncated);
        }
    }

    Err(GenerationError::DisplayNameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

/// Derives a unique username from a display name.
///
/// The bare stem is tried first, then the stem with `_2`, `_3`, and so on.
fn derive_username(
    display_name: &str,
    taken: &mut HashSet<String>,
) -> Result<String, GenerationError> {
    let mut stem = username_stem(display_name);
    while stem.len() < USERNAME_MIN {
        stem.push('_');
    }

    let candidates = std::iter::once(stem.clone())
        .chain((2..=MAX_USERNAME_ATTEMPTS).map(|n| format!("{stem}_{n}")));
    for candidate in candidates {
        if is_valid_username(&candidate) && taken.insert(candidate.clone()) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::UsernameGenerationFailed {
        base: stem,
        max_attempts: MAX_USERNAME_ATTEMPTS,
    })
}

fn pick<T: Copy>(rng: &mut ChaCha8Rng, items: &[T]) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len())).copied()
}

fn pick_owned(rng: &mut ChaCha8Rng, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    items
        .get(rng.random_range(0..items.len()))
        .cloned()
        .unwrap_or_default()
}

/// Selects a deterministic subset of entries from the provided slice.
///
/// The selection count is determined by the RNG state, bounded by `min_count`
/// and `max_count` and clamped to the number of available entries.
fn select_subset(
    rng: &mut ChaCha8Rng,
    entries: &[String],
    min_count: usize,
    max_count: usize,
) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let clamped_min = min_count.min(entries.len());
    let clamped_max = max_count.min(entries.len());
    let count = if clamped_min == clamped_max {
        clamped_min
    } else {
        rng.random_range(clamped_min..=clamped_max)
    };

    let mut shuffled = entries.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}
