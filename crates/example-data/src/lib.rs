//! Deterministic example photographer and photo data for demonstration.
//!
//! This crate generates believable, reproducible gallery data from a JSON seed
//! registry. It is independent of gallery domain types; the gallery maps the
//! generated seeds into its own records when building the in-memory source.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed registries from JSON strings or files
//! - Deterministic dataset generation using named seeds
//! - Username and display name validation matching gallery constraints
//! - Lighting and colour-tone vocabularies woven into photo descriptions
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_dataset};
//!
//! let json = r#"{
//!     "version": 1,
//!     "lightingTags": ["dramatic", "soft"],
//!     "colorToneTags": ["warm", "cool"],
//!     "specialties": ["Portrait", "Street"],
//!     "seeds": [{"name": "test-seed", "seed": 42, "photographerCount": 2, "photosPerPhotographer": 3}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let dataset = generate_example_dataset(&registry, seed_def).expect("generation succeeds");
//!
//! assert_eq!(dataset.photographers.len(), 2);
//! assert_eq!(dataset.photos.len(), 6);
//! ```

mod error;
mod generator;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::generate_example_dataset;
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::{ExampleDataset, ExamplePhotoSeed, ExamplePhotographerSeed};
pub use validation::{
    DISPLAY_NAME_MAX, DISPLAY_NAME_MIN, USERNAME_MAX, USERNAME_MIN, is_valid_display_name,
    is_valid_username,
};
