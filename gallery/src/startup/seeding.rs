//! Building the in-memory catalogue from the example data registry.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use example_data::{
    ExampleDataset, ExamplePhotoSeed, ExamplePhotographerSeed, GenerationError, RegistryError,
    SeedRegistry, generate_example_dataset,
};
use thiserror::Error;
use tracing::info;

use super::config::GallerySettings;
use crate::domain::{
    Dimensions, Photo, PhotoId, PhotoMetadata, PhotoValidationError, Photographer,
    PhotographerId, PhotographerStats, PhotographerValidationError, Username,
};
use crate::outbound::InMemoryPhotoSource;

/// Errors returned while building the seeded catalogue.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Registry parsing or seed lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Dataset generation failed.
    #[error("example data generation error: {0}")]
    Generation(#[from] GenerationError),
    /// A generated photographer violated a domain constraint.
    #[error("generated photographer {id} is invalid: {source}")]
    InvalidPhotographer {
        id: u64,
        #[source]
        source: PhotographerValidationError,
    },
    /// A generated photo violated a domain constraint.
    #[error("generated photo {id} is invalid: {source}")]
    InvalidPhoto {
        id: u64,
        #[source]
        source: PhotoValidationError,
    },
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// Load the configured seed and build a photo source serving it.
///
/// # Examples
///
/// ```rust,no_run
/// use gallery::startup::{GallerySettings, seed_photo_source};
///
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = GallerySettings {
///     latency_ms: 0,
///     seed_name: Some("mossy-owl".to_string()),
///     registry_path: None,
///     preferences_dir: None,
///     scroll_threshold: 400,
/// };
/// let source = seed_photo_source(&settings)?;
/// assert!(source.photo_count() > 0);
/// # Ok(())
/// # }
/// ```
pub fn seed_photo_source(
    settings: &GallerySettings,
) -> Result<InMemoryPhotoSource, StartupSeedingError> {
    let seed_name = settings.seed_name().trim();
    if seed_name.is_empty() {
        return Err(StartupSeedingError::EmptySeedName);
    }

    let registry = load_registry(&settings.registry_path())?;
    let seed = registry.find_seed(seed_name)?;
    let dataset = generate_example_dataset(&registry, seed)?;
    let (photos, photographers) = catalogue_from_dataset(dataset)?;

    info!(
        seed_key = seed_name,
        photographers = photographers.len(),
        photos = photos.len(),
        latency_ms = settings.latency().as_millis(),
        "example catalogue seeded"
    );
    Ok(InMemoryPhotoSource::new(photos, photographers).with_latency(settings.latency()))
}

/// Convert generated seeds into domain records.
///
/// Each photographer's `photos` counter is derived from the dataset rather
/// than trusted from the seed.
pub fn catalogue_from_dataset(
    dataset: ExampleDataset,
) -> Result<(Vec<Photo>, Vec<Photographer>), StartupSeedingError> {
    let mut portfolio_sizes: HashMap<u64, u32> = HashMap::new();
    for photo in &dataset.photos {
        let count = portfolio_sizes.entry(photo.photographer_id).or_default();
        *count = count.saturating_add(1);
    }

    let photographers = dataset
        .photographers
        .into_iter()
        .map(|seed| {
            let photos = portfolio_sizes.get(&seed.id).copied().unwrap_or_default();
            photographer_from_seed(seed, photos)
        })
        .collect::<Result<Vec<_>, _>>()?;
    let photos = dataset
        .photos
        .into_iter()
        .map(photo_from_seed)
        .collect::<Result<Vec<_>, _>>()?;
    Ok((photos, photographers))
}

fn photographer_from_seed(
    seed: ExamplePhotographerSeed,
    photos: u32,
) -> Result<Photographer, StartupSeedingError> {
    let id = seed.id;
    let invalid = |source| StartupSeedingError::InvalidPhotographer { id, source };
    let username = Username::new(&seed.username).map_err(invalid)?;
    Photographer::builder(PhotographerId::new(id), username)
        .display_name(seed.display_name)
        .bio(seed.bio)
        .avatar_url(seed.avatar_url)
        .cover_url(seed.cover_url)
        .location(seed.location)
        .website(seed.website)
        .camera(seed.camera)
        .specialties(seed.specialties)
        .stats(PhotographerStats {
            photos,
            followers: seed.follower_count,
            following: seed.following_count,
        })
        .build()
        .map_err(invalid)
}

fn photo_from_seed(seed: ExamplePhotoSeed) -> Result<Photo, StartupSeedingError> {
    let id = seed.id;
    let invalid = |source| StartupSeedingError::InvalidPhoto { id, source };
    let dimensions = Dimensions::new(seed.width, seed.height).map_err(invalid)?;
    Photo::builder(
        PhotoId::new(id),
        PhotographerId::new(seed.photographer_id),
        dimensions,
    )
    .title(seed.title)
    .url(seed.url)
    .high_res_url(seed.high_res_url)
    .description(seed.description)
    .metadata(PhotoMetadata {
        camera: seed.camera,
        location: seed.location,
        taken_on: seed.taken_on,
        settings: seed.settings,
    })
    .likes(seed.likes)
    .saves(seed.saves)
    .featured(seed.featured)
    .build()
    .map_err(invalid)
}

fn load_registry(path: &Path) -> Result<SeedRegistry, StartupSeedingError> {
    let read_error = |source| StartupSeedingError::RegistryRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "registry path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir
        .read_to_string(Path::new(file_name))
        .map_err(read_error)?;
    Ok(SeedRegistry::from_json(&contents)?)
}
