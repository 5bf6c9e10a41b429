//! Gallery configuration loaded via OrthoConfig.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_SEED_NAME: &str = "mossy-owl";
const DEFAULT_PREFERENCES_DIR: &str = ".gallery/preferences";

fn default_registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("example-data")
        .join("seeds.json")
}

/// Runtime settings for the gallery demo.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GALLERY")]
pub struct GallerySettings {
    /// Simulated photo source latency in milliseconds.
    #[ortho_config(default = 800)]
    pub latency_ms: u64,
    /// Seed name to load from the registry.
    pub seed_name: Option<String>,
    /// Optional registry path override.
    pub registry_path: Option<PathBuf>,
    /// Directory holding persisted preferences.
    pub preferences_dir: Option<PathBuf>,
    /// Distance from the bottom, in pixels, that triggers the next page.
    #[ortho_config(default = 400)]
    pub scroll_threshold: u32,
}

impl GallerySettings {
    /// Simulated photo source latency.
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Return the configured seed name, falling back to the default.
    pub fn seed_name(&self) -> &str {
        self.seed_name.as_deref().unwrap_or(DEFAULT_SEED_NAME)
    }

    /// Return the configured registry path, falling back to the bundled
    /// fixture.
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(default_registry_path)
    }

    /// Return the configured preferences directory, falling back to
    /// `.gallery/preferences` under the working directory.
    pub fn preferences_dir(&self) -> PathBuf {
        self.preferences_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFERENCES_DIR))
    }
}
