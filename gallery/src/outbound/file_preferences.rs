//! Preference store persisting each key as a JSON file in one directory.
//!
//! Access goes through a capability handle on the directory, so keys can
//! never name files outside it. Writes land in a dot-prefixed temporary file
//! first and are renamed over the target, leaving either the old or the new
//! value on disk.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use serde_json::Value;
use tracing::debug;

use crate::domain::ports::{PreferenceStore, PreferenceStoreError, validate_key};

/// Preference store rooted at a directory on disk.
///
/// Filesystem calls block, so each one runs on tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    dir: Arc<Dir>,
    root: Arc<Path>,
}

impl FilePreferenceStore {
    /// Open the store, creating `root` and its parents when missing.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, PreferenceStoreError> {
        let root = root.into();
        Dir::create_ambient_dir_all(&root, ambient_authority())
            .map_err(|error| io_error(&root, &error))?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority())
            .map_err(|error| io_error(&root, &error))?;
        Ok(Self {
            dir: Arc::new(dir),
            root: root.into(),
        })
    }

    /// Directory the store was opened on.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_name(key: &str) -> String {
        format!("{key}.json")
    }

    fn staging_name(key: &str) -> String {
        format!(".{key}.json.tmp")
    }

    async fn run_blocking<T, F>(&self, operation: F) -> Result<T, PreferenceStoreError>
    where
        F: FnOnce(&Dir, &Path) -> Result<T, PreferenceStoreError> + Send + 'static,
        T: Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        let root = Arc::clone(&self.root);
        tokio::task::spawn_blocking(move || operation(&dir, &root))
            .await
            .map_err(|error| PreferenceStoreError::io(format!("preference task failed: {error}")))?
    }
}

fn io_error(path: &Path, error: &io::Error) -> PreferenceStoreError {
    PreferenceStoreError::io(format!("{}: {error}", path.display()))
}

fn read_value(dir: &Dir, root: &Path, name: &str) -> Result<Option<Value>, PreferenceStoreError> {
    let bytes = match dir.read(name) {
        Ok(bytes) => bytes,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(io_error(&root.join(name), &error)),
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|error| PreferenceStoreError::serialization(format!("{name}: {error}")))
}

fn write_atomically(
    dir: &Dir,
    root: &Path,
    name: &str,
    staging: &str,
    bytes: &[u8],
) -> Result<(), PreferenceStoreError> {
    dir.write(staging, bytes)
        .map_err(|error| io_error(&root.join(staging), &error))?;
    if let Err(error) = dir.rename(staging, dir, name) {
        let _cleanup_result = dir.remove_file(staging);
        return Err(io_error(&root.join(name), &error));
    }
    Ok(())
}

fn remove_if_exists(dir: &Dir, root: &Path, name: &str) -> Result<(), PreferenceStoreError> {
    match dir.remove_file(name) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(io_error(&root.join(name), &error)),
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn load(&self, key: &str) -> Result<Option<Value>, PreferenceStoreError> {
        validate_key(key)?;
        let name = Self::file_name(key);
        self.run_blocking(move |dir, root| read_value(dir, root, &name))
            .await
    }

    async fn save(&self, key: &str, value: &Value) -> Result<(), PreferenceStoreError> {
        validate_key(key)?;
        let name = Self::file_name(key);
        let staging = Self::staging_name(key);
        let bytes = serde_json::to_vec(value)
            .map_err(|error| PreferenceStoreError::serialization(error.to_string()))?;
        let written = bytes.len();

        self.run_blocking(move |dir, root| write_atomically(dir, root, &name, &staging, &bytes))
            .await?;
        debug!(key, bytes = written, "preference persisted");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PreferenceStoreError> {
        validate_key(key)?;
        let name = Self::file_name(key);
        self.run_blocking(move |dir, root| remove_if_exists(dir, root, &name))
            .await
    }
}
