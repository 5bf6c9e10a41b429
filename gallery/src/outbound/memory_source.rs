//! In-memory photo source with simulated latency.
//!
//! The catalogue is read-only and shared behind `Arc`. A filter's working set
//! is kept as catalogue positions so later pages of the same session only
//! slice. Only the most recently used filters are cached.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pagination::{Page, PageRequest, paginate};
use tracing::debug;

use crate::domain::ports::{PhotoSource, PhotoSourceError};
use crate::domain::{FilterSpec, Photo, PhotoId, Photographer, PhotographerId, Username};

/// Number of filters whose working sets are kept between fetches.
pub const WORKING_SET_CACHE_CAPACITY: usize = 16;

/// Positions of the matching photos within the catalogue.
type WorkingSet = Arc<[usize]>;

/// Photo source serving a fixed catalogue from memory.
#[derive(Debug)]
pub struct InMemoryPhotoSource {
    photos: Arc<[Photo]>,
    photographers: Arc<[Photographer]>,
    latency: Duration,
    // Most recently used first.
    working_sets: Mutex<VecDeque<(FilterSpec, WorkingSet)>>,
}

impl InMemoryPhotoSource {
    /// Create a source with no simulated latency.
    ///
    /// Photos are served in ascending id order and photographers likewise,
    /// regardless of input order.
    pub fn new(mut photos: Vec<Photo>, mut photographers: Vec<Photographer>) -> Self {
        photos.sort_by_key(Photo::id);
        photographers.sort_by_key(Photographer::id);
        Self {
            photos: photos.into(),
            photographers: photographers.into(),
            latency: Duration::ZERO,
            working_sets: Mutex::new(VecDeque::with_capacity(WORKING_SET_CACHE_CAPACITY)),
        }
    }

    /// Delay every call by `latency`.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    /// Number of filters whose working sets are cached. Never exceeds
    /// [`WORKING_SET_CACHE_CAPACITY`].
    pub fn cached_filters(&self) -> usize {
        self.working_sets.lock().map_or(0, |sets| sets.len())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn working_set(&self, filter: &FilterSpec) -> Result<WorkingSet, PhotoSourceError> {
        let mut sets = self
            .working_sets
            .lock()
            .map_err(|_| PhotoSourceError::query("working set cache poisoned"))?;
        if let Some(position) = sets.iter().position(|(cached, _)| cached == filter) {
            if let Some(entry) = sets.remove(position) {
                let set = Arc::clone(&entry.1);
                sets.push_front(entry);
                return Ok(set);
            }
        }

        let set: WorkingSet = self
            .photos
            .iter()
            .enumerate()
            .filter(|(_, photo)| filter.matches(photo))
            .map(|(position, _)| position)
            .collect();
        sets.push_front((filter.clone(), Arc::clone(&set)));
        sets.truncate(WORKING_SET_CACHE_CAPACITY);
        debug!(matching = set.len(), cached = sets.len(), "filtered working set cached");
        Ok(set)
    }
}

#[async_trait]
impl PhotoSource for InMemoryPhotoSource {
    async fn fetch_page(
        &self,
        filter: &FilterSpec,
        request: PageRequest,
    ) -> Result<Page<Photo>, PhotoSourceError> {
        self.simulate_latency().await;
        if filter.is_empty() {
            return Ok(paginate(self.photos.as_ref(), request));
        }

        let set = self.working_set(filter)?;
        let window = paginate(set.as_ref(), request);
        let photos = window
            .items()
            .iter()
            .filter_map(|&position| self.photos.get(position).cloned())
            .collect();
        Ok(Page::new(photos, request, window.total()))
    }

    async fn find_photo(&self, id: PhotoId) -> Result<Option<Photo>, PhotoSourceError> {
        self.simulate_latency().await;
        Ok(self
            .photos
            .binary_search_by_key(&id, Photo::id)
            .ok()
            .and_then(|index| self.photos.get(index))
            .cloned())
    }

    async fn list_photos(&self) -> Result<Vec<Photo>, PhotoSourceError> {
        self.simulate_latency().await;
        Ok(self.photos.to_vec())
    }

    async fn photos_by_photographer(
        &self,
        id: PhotographerId,
    ) -> Result<Vec<Photo>, PhotoSourceError> {
        self.simulate_latency().await;
        Ok(self
            .photos
            .iter()
            .filter(|photo| photo.photographer_id() == id)
            .cloned()
            .collect())
    }

    async fn find_photographer(
        &self,
        id: PhotographerId,
    ) -> Result<Option<Photographer>, PhotoSourceError> {
        self.simulate_latency().await;
        Ok(self.photographers.iter().find(|p| p.id() == id).cloned())
    }

    async fn find_photographer_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Photographer>, PhotoSourceError> {
        self.simulate_latency().await;
        Ok(self
            .photographers
            .iter()
            .find(|p| p.username() == username)
            .cloned())
    }

    async fn list_photographers(&self) -> Result<Vec<Photographer>, PhotoSourceError> {
        self.simulate_latency().await;
        Ok(self.photographers.to_vec())
    }
}
