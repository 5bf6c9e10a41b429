//! Integration tests for loading settings and seeding the catalogue.

use std::ffi::OsString;
use std::time::Duration;

use env_lock::lock_env;
use gallery::domain::{DEFAULT_SCROLL_THRESHOLD_PX, FilterSpec};
use gallery::domain::ports::PhotoSource;
use gallery::startup::{GallerySettings, seed_photo_source};
use ortho_config::OrthoConfig;
use pagination::PageRequest;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn default_environment_seeds_a_browsable_catalogue() {
    let _guard = lock_env([
        ("GALLERY_LATENCY_MS", Some("0".to_owned())),
        ("GALLERY_SEED_NAME", None::<String>),
        ("GALLERY_REGISTRY_PATH", None::<String>),
        ("GALLERY_PREFERENCES_DIR", None::<String>),
        ("GALLERY_SCROLL_THRESHOLD", None::<String>),
    ]);

    let settings = GallerySettings::load_from_iter([OsString::from("gallery")])
        .expect("settings load without overrides");
    assert_eq!(settings.latency(), Duration::ZERO);
    assert_eq!(settings.scroll_threshold, DEFAULT_SCROLL_THRESHOLD_PX);

    let source = seed_photo_source(&settings).expect("default seed builds");
    let page = source
        .fetch_page(
            &FilterSpec::default(),
            PageRequest::page(1, 12).expect("valid request"),
        )
        .await
        .expect("first page");
    assert_eq!(page.len(), 12);
    assert!(page.has_more());
}
