//! Integration tests for user preferences over the file-backed store.

use std::path::Path;
use std::sync::Arc;

use gallery::domain::{ErrorCode, PhotoId, UserPreferencesService};
use gallery::outbound::{FilePreferenceStore, InMemoryPreferenceStore};
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn service(root: &Path) -> UserPreferencesService<FilePreferenceStore> {
    let store = FilePreferenceStore::open(root).expect("open store");
    UserPreferencesService::new(Arc::new(store))
}

#[rstest]
#[tokio::test]
async fn preferences_survive_a_restart(temp_dir: TempDir) {
    let first = service(temp_dir.path());
    first.login("Ada_L", "Ada Lovelace").await.expect("login");
    assert!(first.toggle_like(PhotoId::new(3)).await.expect("like"));
    assert!(first.toggle_save(PhotoId::new(5)).await.expect("save"));

    let second = service(temp_dir.path());
    let prefs = second.load().await.expect("load");

    let user = prefs.user().expect("still signed in");
    assert_eq!(user.username.as_ref(), "ada_l");
    assert_eq!(user.display_name, "Ada Lovelace");
    assert!(prefs.is_liked(PhotoId::new(3)));
    assert!(prefs.is_saved(PhotoId::new(5)));
}

#[rstest]
#[tokio::test]
async fn logout_keeps_likes_and_saves(temp_dir: TempDir) {
    let prefs = service(temp_dir.path());
    prefs.login("grace", "Grace").await.expect("login");
    prefs.toggle_like(PhotoId::new(1)).await.expect("like");

    let after = prefs.logout().await.expect("logout");

    assert!(!after.is_authenticated());
    assert!(after.is_liked(PhotoId::new(1)));
    assert!(!temp_dir.path().join("user.json").exists());
}

#[rstest]
#[tokio::test]
async fn toggling_twice_restores_the_original_state(temp_dir: TempDir) {
    let prefs = service(temp_dir.path());
    let id = PhotoId::new(8);

    assert!(prefs.toggle_save(id).await.expect("save"));
    assert!(!prefs.toggle_save(id).await.expect("unsave"));
    assert!(!prefs.is_photo_saved(id).await.expect("check"));
}

#[rstest]
#[tokio::test]
async fn corrupt_user_file_reads_as_signed_out(temp_dir: TempDir) {
    std::fs::write(temp_dir.path().join("user.json"), b"[1, 2, 3]").expect("write");
    let prefs = service(temp_dir.path());

    let loaded = prefs.load().await.expect("load");
    assert!(!loaded.is_authenticated());
}

#[rstest]
#[tokio::test]
async fn truncated_file_reads_as_empty_and_is_repaired(temp_dir: TempDir) {
    std::fs::write(temp_dir.path().join("likedPhotos.json"), b"[1, 2").expect("write");
    let prefs = service(temp_dir.path());

    let loaded = prefs.load().await.expect("load");
    assert!(loaded.liked_photos().is_empty());

    prefs.login("ada", "Ada").await.expect("login");
    assert!(prefs.toggle_like(PhotoId::new(1)).await.expect("like"));

    let reopened = service(temp_dir.path()).load().await.expect("reload");
    assert!(reopened.is_authenticated());
    assert!(reopened.is_liked(PhotoId::new(1)));
    assert!(!reopened.is_liked(PhotoId::new(2)));
}

#[tokio::test]
async fn blank_display_name_is_rejected() {
    let prefs = UserPreferencesService::new(Arc::new(InMemoryPreferenceStore::new()));
    let err = prefs.login("ada", "   ").await.expect_err("blank name");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}
