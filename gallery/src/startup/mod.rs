//! Startup wiring: settings and the seeded example catalogue.

mod config;
mod seeding;

pub use config::GallerySettings;
pub use seeding::{StartupSeedingError, catalogue_from_dataset, seed_photo_source};
