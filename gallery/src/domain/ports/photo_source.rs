//! Port for reading the photo catalogue.
//!
//! The [`PhotoSource`] trait is the single seam through which the gallery
//! reaches photo and photographer records. Adapters apply the filter
//! predicate and pager themselves so they can cache filtered working sets.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{FilterSpec, Photo, PhotoId, Photographer, PhotographerId, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by photo source adapters.
    pub enum PhotoSourceError {
        /// The source could not be reached.
        Unavailable { message: String } => "photo source unavailable: {message}",
        /// The source rejected or failed a query.
        Query { message: String } => "photo source query failed: {message}",
    }
}

/// Read access to photos and photographers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Fetch one window of the photos matching `filter`, in catalogue order.
    ///
    /// The returned page reports the total number of matching photos and
    /// whether records remain past the window.
    async fn fetch_page(
        &self,
        filter: &FilterSpec,
        request: PageRequest,
    ) -> Result<Page<Photo>, PhotoSourceError>;

    /// Look up a single photo.
    async fn find_photo(&self, id: PhotoId) -> Result<Option<Photo>, PhotoSourceError>;

    /// Every photo in catalogue order.
    async fn list_photos(&self) -> Result<Vec<Photo>, PhotoSourceError>;

    /// Every photo owned by a photographer, in catalogue order.
    async fn photos_by_photographer(
        &self,
        id: PhotographerId,
    ) -> Result<Vec<Photo>, PhotoSourceError>;

    /// Look up a photographer by identifier.
    async fn find_photographer(
        &self,
        id: PhotographerId,
    ) -> Result<Option<Photographer>, PhotoSourceError>;

    /// Look up a photographer by username. Usernames compare case-insensitively.
    async fn find_photographer_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Photographer>, PhotoSourceError>;

    /// Every photographer in identifier order.
    async fn list_photographers(&self) -> Result<Vec<Photographer>, PhotoSourceError>;
}

/// Fixture implementation holding an empty catalogue.
///
/// Use it where the gallery needs a source but the records are not under
/// test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePhotoSource;

#[async_trait]
impl PhotoSource for FixturePhotoSource {
    async fn fetch_page(
        &self,
        _filter: &FilterSpec,
        request: PageRequest,
    ) -> Result<Page<Photo>, PhotoSourceError> {
        Ok(Page::new(Vec::new(), request, 0))
    }

    async fn find_photo(&self, _id: PhotoId) -> Result<Option<Photo>, PhotoSourceError> {
        Ok(None)
    }

    async fn list_photos(&self) -> Result<Vec<Photo>, PhotoSourceError> {
        Ok(Vec::new())
    }

    async fn photos_by_photographer(
        &self,
        _id: PhotographerId,
    ) -> Result<Vec<Photo>, PhotoSourceError> {
        Ok(Vec::new())
    }

    async fn find_photographer(
        &self,
        _id: PhotographerId,
    ) -> Result<Option<Photographer>, PhotoSourceError> {
        Ok(None)
    }

    async fn find_photographer_by_username(
        &self,
        _username: &Username,
    ) -> Result<Option<Photographer>, PhotoSourceError> {
        Ok(None)
    }

    async fn list_photographers(&self) -> Result<Vec<Photographer>, PhotoSourceError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_source_serves_an_exhausted_first_page() {
        let request = PageRequest::page(1, 12).expect("valid request");
        let page = FixturePhotoSource
            .fetch_page(&FilterSpec::default(), request)
            .await
            .expect("fixture fetch succeeds");

        assert!(page.is_empty());
        assert!(!page.has_more());
        assert_eq!(page.total(), 0);
    }

    #[tokio::test]
    async fn fixture_source_finds_nothing() {
        let username = Username::new("ada").expect("valid username");
        let found = FixturePhotoSource
            .find_photographer_by_username(&username)
            .await
            .expect("fixture lookup succeeds");
        assert!(found.is_none());
    }

    #[test]
    fn errors_render_their_message() {
        let err = PhotoSourceError::unavailable("timed out");
        assert_eq!(err.to_string(), "photo source unavailable: timed out");
    }
}
