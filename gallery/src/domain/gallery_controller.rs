//! Gallery data controller: fetch, filter, paginate, append.
//!
//! The controller owns no session state. It fetches tickets issued by a
//! [`GallerySession`] through the [`PhotoSource`] port and applies the
//! results back to the session.

use std::sync::Arc;

use pagination::Page;
use tracing::info;

use super::ports::{PhotoSource, PhotoSourceError};
use super::{Error, FilterSpec, GallerySession, GalleryView, LoadOutcome, LoadTicket, Photo};

/// Drives [`GallerySession`] loads against a photo source.
pub struct GalleryController<S> {
    source: Arc<S>,
}

impl<S> Clone for GalleryController<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> GalleryController<S> {
    /// Create a controller over the given source.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

impl<S> GalleryController<S>
where
    S: PhotoSource,
{
    fn map_source_error(error: PhotoSourceError) -> Error {
        match error {
            PhotoSourceError::Unavailable { message } => {
                Error::load_failed(format!("photo source unavailable: {message}"))
            }
            PhotoSourceError::Query { message } => {
                Error::load_failed(format!("photo query failed: {message}"))
            }
        }
    }

    /// Fetch the page a ticket asks for.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::LoadFailed`] when the source
    /// rejects the fetch.
    pub async fn fetch(&self, ticket: &LoadTicket) -> Result<Page<Photo>, Error> {
        self.source
            .fetch_page(ticket.filter(), ticket.request())
            .await
            .map_err(Self::map_source_error)
    }

    /// Open a session for a view and load its first page.
    pub async fn open(&self, view: &GalleryView) -> (GallerySession, LoadOutcome) {
        let mut session = GallerySession::new(view.page_plan());
        let outcome = self.initialize(&mut session, view.filter()).await;
        (session, outcome)
    }

    /// Reset the session for `filter` and load the first page.
    pub async fn initialize(&self, session: &mut GallerySession, filter: FilterSpec) -> LoadOutcome {
        let ticket = session.begin_initialize(filter);
        info!(
            generation = ticket.generation(),
            limit = ticket.request().limit(),
            active_filters = ticket.filter().active_filter_count(),
            "gallery session started"
        );
        let result = self.fetch(&ticket).await;
        session.complete(ticket, result)
    }

    /// Load and append the next page. A no-op unless the session is ready
    /// with more records.
    pub async fn load_more(&self, session: &mut GallerySession) -> LoadOutcome {
        let Some(ticket) = session.begin_load_more() else {
            return LoadOutcome::Skipped;
        };
        let result = self.fetch(&ticket).await;
        session.complete(ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::always;
    use pagination::{PageRequest, paginate};

    use super::*;
    use crate::domain::ports::MockPhotoSource;
    use crate::domain::{Dimensions, ErrorCode, PagePlan, PhotoId, PhotographerId, SessionState};

    fn photo(id: u64) -> Photo {
        let dims = Dimensions::new(6000, 4000).expect("non-zero");
        Photo::builder(PhotoId::new(id), PhotographerId::new(1), dims)
            .title(format!("Photo {id}"))
            .url(format!("https://images.example.com/photos/{id}.jpg"))
            .build()
            .expect("valid photo")
    }

    fn serving(len: u64) -> MockPhotoSource {
        let data: Vec<Photo> = (1..=len).map(photo).collect();
        let mut source = MockPhotoSource::new();
        source
            .expect_fetch_page()
            .with(always(), always())
            .returning(move |_, request: PageRequest| Ok(paginate(&data, request)));
        source
    }

    #[tokio::test]
    async fn home_view_loads_nine_then_six() {
        let controller = GalleryController::new(Arc::new(serving(20)));

        let (mut session, outcome) = controller.open(&GalleryView::Home).await;
        assert_eq!(outcome, LoadOutcome::Applied { appended: 9, has_more: true });

        let outcome = controller.load_more(&mut session).await;
        assert_eq!(outcome, LoadOutcome::Applied { appended: 6, has_more: true });
        assert_eq!(session.photos().len(), 15);
    }

    #[tokio::test]
    async fn source_failure_maps_to_load_failed() {
        let mut source = MockPhotoSource::new();
        source
            .expect_fetch_page()
            .times(1)
            .returning(|_, _| Err(PhotoSourceError::unavailable("offline")));
        let controller = GalleryController::new(Arc::new(source));
        let mut session = GallerySession::new(PagePlan::GALLERY);

        let outcome = controller
            .initialize(&mut session, FilterSpec::default())
            .await;

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(
            session.last_error().map(Error::code),
            Some(ErrorCode::LoadFailed)
        );
    }

    #[tokio::test]
    async fn exhausted_session_skips_without_fetching() {
        let mut source = MockPhotoSource::new();
        source
            .expect_fetch_page()
            .times(1)
            .returning(|_, request| Ok(paginate(&[photo(1)], request)));
        let controller = GalleryController::new(Arc::new(source));

        let (mut session, _) = controller.open(&GalleryView::Gallery).await;

        assert_eq!(controller.load_more(&mut session).await, LoadOutcome::Skipped);
    }
}
