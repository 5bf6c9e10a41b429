//! Photo detail and photographer profile lookups.

use std::sync::Arc;

use tracing::debug;

use super::ports::{PhotoSource, PhotoSourceError};
use super::{Error, GalleryView, Photo, PhotoId, Photographer, PhotographerId, Username};

/// Number of related photos shown beside a photo by default.
pub const DEFAULT_RELATED_LIMIT: usize = 6;

/// Single-record queries over the photo source.
pub struct PhotoService<S> {
    source: Arc<S>,
}

impl<S> Clone for PhotoService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> PhotoService<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

impl<S> PhotoService<S>
where
    S: PhotoSource,
{
    fn map_source_error(error: PhotoSourceError) -> Error {
        Error::load_failed(error.to_string())
    }

    /// Fetch a photo by id.
    ///
    /// # Errors
    ///
    /// `NotFound` when no photo has the id; `LoadFailed` when the source
    /// fails.
    pub async fn photo_by_id(&self, id: PhotoId) -> Result<Photo, Error> {
        self.source
            .find_photo(id)
            .await
            .map_err(Self::map_source_error)?
            .ok_or_else(|| Error::not_found(format!("photo {id} not found")))
    }

    /// Photos to show alongside `id`.
    ///
    /// The photo itself is excluded. Other photos by the same photographer
    /// come first, then the rest of the catalogue, each group in id order.
    pub async fn related_photos(&self, id: PhotoId, limit: usize) -> Result<Vec<Photo>, Error> {
        let photo = self.photo_by_id(id).await?;
        let owner = photo.photographer_id();

        let mut catalogue = self
            .source
            .list_photos()
            .await
            .map_err(Self::map_source_error)?;
        catalogue.retain(|p| p.id() != id);
        catalogue.sort_by_key(|p| (p.photographer_id() != owner, p.id()));
        catalogue.truncate(limit);

        debug!(photo = %id, related = catalogue.len(), "related photos resolved");
        Ok(catalogue)
    }

    /// Fetch a photographer by id.
    pub async fn photographer(&self, id: PhotographerId) -> Result<Photographer, Error> {
        self.source
            .find_photographer(id)
            .await
            .map_err(Self::map_source_error)?
            .ok_or_else(|| Error::not_found(format!("photographer {id} not found")))
    }

    /// Fetch a photographer by username, compared case-insensitively.
    ///
    /// Strings that cannot be usernames are reported as `NotFound`, since
    /// they arrive from route segments.
    pub async fn photographer_by_username(&self, username: &str) -> Result<Photographer, Error> {
        let not_found = || Error::not_found(format!("photographer '{username}' not found"));
        let parsed = Username::new(username).map_err(|_| not_found())?;
        self.source
            .find_photographer_by_username(&parsed)
            .await
            .map_err(Self::map_source_error)?
            .ok_or_else(not_found)
    }

    /// Resolve a profile route into the photographer and their gallery view.
    pub async fn profile(&self, username: &str) -> Result<(Photographer, GalleryView), Error> {
        let photographer = self.photographer_by_username(username).await?;
        let view = GalleryView::Profile(photographer.id());
        Ok((photographer, view))
    }

    /// Every photographer in id order.
    pub async fn photographers(&self) -> Result<Vec<Photographer>, Error> {
        self.source
            .list_photographers()
            .await
            .map_err(Self::map_source_error)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::ports::MockPhotoSource;
    use crate::domain::{Dimensions, ErrorCode};

    fn photo(id: u64, owner: u64) -> Photo {
        let dims = Dimensions::new(3000, 3000).expect("non-zero");
        Photo::builder(PhotoId::new(id), PhotographerId::new(owner), dims)
            .title(format!("Photo {id}"))
            .url(format!("https://images.example.com/photos/{id}.jpg"))
            .build()
            .expect("valid photo")
    }

    fn catalogue() -> Vec<Photo> {
        vec![
            photo(1, 2),
            photo(2, 1),
            photo(3, 1),
            photo(4, 2),
            photo(5, 3),
            photo(6, 1),
        ]
    }

    fn source_with_catalogue() -> MockPhotoSource {
        let mut source = MockPhotoSource::new();
        source.expect_find_photo().returning(|id| {
            Ok(catalogue().into_iter().find(|p| p.id() == id))
        });
        source.expect_list_photos().returning(|| Ok(catalogue()));
        source
    }

    #[tokio::test]
    async fn missing_photo_is_not_found() {
        let service = PhotoService::new(Arc::new(source_with_catalogue()));
        let err = service
            .photo_by_id(PhotoId::new(99))
            .await
            .expect_err("photo 99 is absent");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn related_photos_prefer_same_photographer() {
        let service = PhotoService::new(Arc::new(source_with_catalogue()));
        let related = service
            .related_photos(PhotoId::new(2), 4)
            .await
            .expect("related photos");

        let ids: Vec<u64> = related.iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, vec![3, 6, 1, 4]);
    }

    #[tokio::test]
    async fn related_photos_never_include_the_photo() {
        let service = PhotoService::new(Arc::new(source_with_catalogue()));
        let related = service
            .related_photos(PhotoId::new(5), DEFAULT_RELATED_LIMIT)
            .await
            .expect("related photos");

        assert_eq!(related.len(), 5);
        assert!(related.iter().all(|p| p.id() != PhotoId::new(5)));
    }

    #[tokio::test]
    async fn invalid_username_is_not_found_without_querying() {
        let source = MockPhotoSource::new();
        let service = PhotoService::new(Arc::new(source));
        let err = service
            .photographer_by_username("no way")
            .await
            .expect_err("invalid username");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn source_failure_is_load_failed() {
        let mut source = MockPhotoSource::new();
        source
            .expect_find_photographer()
            .with(eq(PhotographerId::new(1)))
            .returning(|_| Err(PhotoSourceError::query("boom")));
        let service = PhotoService::new(Arc::new(source));

        let err = service
            .photographer(PhotographerId::new(1))
            .await
            .expect_err("source failure");
        assert_eq!(err.code(), ErrorCode::LoadFailed);
    }
}
