//! Per-view browsing session state.
//!
//! A [`GallerySession`] accumulates the photos a view has loaded so far and
//! enforces the loading state machine:
//!
//! ```text
//! idle -> loading-initial -> ready(has-more | exhausted) -> loading-more -> ready
//! ```
//!
//! Loads are split into three phases so the caller controls the await
//! point: `begin_*` hands out a [`LoadTicket`], the ticket is fetched, and
//! [`GallerySession::complete`] applies the result. Every ticket carries the
//! session generation it was issued under; a filter change bumps the
//! generation so late completions from the previous filter are discarded.

use std::collections::HashSet;

use pagination::{Page, PageRequest};
use tracing::{debug, warn};

use super::{Error, FilterSpec, PagePlan, Photo, PhotoId};

/// Loading state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing loaded; also the state after a failed first load.
    Idle,
    /// Fetching the first page of a new generation.
    LoadingInitial,
    /// First page applied; `has_more` mirrors the source.
    Ready { has_more: bool },
    /// Fetching a follow-up page.
    LoadingMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadKind {
    Initial,
    More,
}

/// An outstanding load issued by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    filter: FilterSpec,
    request: PageRequest,
    kind: LoadKind,
}

impl LoadTicket {
    /// Generation the ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Filter the load was issued with.
    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Page of the source to fetch.
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// True for the first load of a generation.
    pub fn is_initial(&self) -> bool {
        self.kind == LoadKind::Initial
    }
}

/// Result of applying a completed load to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page was appended.
    Applied { appended: usize, has_more: bool },
    /// The fetch failed; the error is recorded on the session.
    Failed,
    /// The ticket belonged to an earlier generation and was ignored.
    Stale,
    /// No load was issued because the session was busy or exhausted.
    Skipped,
}

/// Accumulated results and loading state for one mounted view.
///
/// ## Invariants
/// - At most one load is outstanding.
/// - Photos are appended in source order and never contain a duplicate id.
/// - No load is issued while loading or once the source is exhausted.
#[derive(Debug, Clone)]
pub struct GallerySession {
    plan: PagePlan,
    filter: FilterSpec,
    generation: u64,
    state: SessionState,
    photos: Vec<Photo>,
    seen: HashSet<PhotoId>,
    next_offset: usize,
    pages_loaded: usize,
    total: Option<usize>,
    last_error: Option<Error>,
}

impl GallerySession {
    /// Create an idle session with no filter applied.
    pub fn new(plan: PagePlan) -> Self {
        Self {
            plan,
            filter: FilterSpec::default(),
            generation: 0,
            state: SessionState::Idle,
            photos: Vec::new(),
            seen: HashSet::new(),
            next_offset: 0,
            pages_loaded: 0,
            total: None,
            last_error: None,
        }
    }

    /// Paging plan fixed at construction.
    pub fn plan(&self) -> PagePlan {
        self.plan
    }

    /// Filter of the current generation.
    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Counter bumped by every initialisation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current loading state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Photos accumulated across applied pages, in source order.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// 1-based number of the last page applied; zero before the first load.
    pub fn page(&self) -> usize {
        self.pages_loaded
    }

    /// Total matching photos reported by the latest page.
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    /// Error recorded by the latest failed load, if any.
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// True while an initial or follow-up load is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(
            self.state,
            SessionState::LoadingInitial | SessionState::LoadingMore
        )
    }

    /// True only when ready and the source reported more records.
    pub fn has_more(&self) -> bool {
        matches!(self.state, SessionState::Ready { has_more: true })
    }

    /// Reset for `filter` and issue the first-page load.
    ///
    /// Always succeeds: a new generation supersedes any outstanding load.
    pub fn begin_initialize(&mut self, filter: FilterSpec) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        self.filter = filter;
        self.state = SessionState::LoadingInitial;
        self.photos.clear();
        self.seen.clear();
        self.next_offset = 0;
        self.pages_loaded = 0;
        self.total = None;
        self.last_error = None;

        LoadTicket {
            generation: self.generation,
            filter: self.filter.clone(),
            request: PageRequest::with_limit(0, self.plan.initial_limit()),
            kind: LoadKind::Initial,
        }
    }

    /// Issue the next-page load, or `None` unless ready with more records.
    pub fn begin_load_more(&mut self) -> Option<LoadTicket> {
        if !self.has_more() {
            return None;
        }
        self.state = SessionState::LoadingMore;
        Some(LoadTicket {
            generation: self.generation,
            filter: self.filter.clone(),
            request: PageRequest::with_limit(self.next_offset, self.plan.increment_limit()),
            kind: LoadKind::More,
        })
    }

    /// Apply the result of a fetched ticket.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<Page<Photo>, Error>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation || !self.is_loading() {
            debug!(
                ticket_generation = ticket.generation,
                session_generation = self.generation,
                "discarding stale page"
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(page) => self.apply_page(&ticket, page),
            Err(error) => {
                warn!(
                    error = %error,
                    offset = ticket.request.offset(),
                    initial = ticket.is_initial(),
                    "page load failed"
                );
                self.state = if ticket.is_initial() {
                    SessionState::Idle
                } else {
                    SessionState::Ready { has_more: true }
                };
                self.last_error = Some(error);
                LoadOutcome::Failed
            }
        }
    }

    fn apply_page(&mut self, ticket: &LoadTicket, page: Page<Photo>) -> LoadOutcome {
        let has_more = page.has_more() && !page.is_empty();
        let fetched = page.len();
        self.total = Some(page.total());

        let mut appended = 0;
        for photo in page.into_items() {
            if self.seen.insert(photo.id()) {
                self.photos.push(photo);
                appended += 1;
            }
        }

        self.next_offset = ticket.request.offset().saturating_add(fetched);
        self.pages_loaded += 1;
        self.last_error = None;
        self.state = SessionState::Ready { has_more };

        debug!(
            generation = self.generation,
            page = self.pages_loaded,
            appended,
            accumulated = self.photos.len(),
            has_more,
            "page applied"
        );
        LoadOutcome::Applied { appended, has_more }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::{Dimensions, PhotographerId};

    fn photo(id: u64) -> Photo {
        let dims = Dimensions::new(4000, 6000).expect("non-zero");
        Photo::builder(PhotoId::new(id), PhotographerId::new(1), dims)
            .title(format!("Photo {id}"))
            .url(format!("https://images.example.com/photos/{id}.jpg"))
            .build()
            .expect("valid photo")
    }

    fn catalogue(len: u64) -> Vec<Photo> {
        (1..=len).map(photo).collect()
    }

    fn serve(ticket: &LoadTicket, catalogue: &[Photo]) -> Result<Page<Photo>, Error> {
        Ok(pagination::paginate(catalogue, ticket.request()))
    }

    #[fixture]
    fn session() -> GallerySession {
        GallerySession::new(PagePlan::uniform(12).expect("valid plan"))
    }

    #[rstest]
    fn new_session_is_idle_and_cannot_load_more(mut session: GallerySession) {
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.begin_load_more().is_none());
    }

    #[rstest]
    fn initial_load_reaches_ready_with_more(mut session: GallerySession) {
        let data = catalogue(30);
        let ticket = session.begin_initialize(FilterSpec::default());
        assert_eq!(session.state(), SessionState::LoadingInitial);

        let page = serve(&ticket, &data);
        let outcome = session.complete(ticket, page);

        assert_eq!(outcome, LoadOutcome::Applied { appended: 12, has_more: true });
        assert_eq!(session.page(), 1);
        assert_eq!(session.total(), Some(30));
    }

    #[rstest]
    fn load_more_is_idempotent_while_in_flight(mut session: GallerySession) {
        let data = catalogue(30);
        let ticket = session.begin_initialize(FilterSpec::default());
        let page = serve(&ticket, &data);
        session.complete(ticket, page);

        let first = session.begin_load_more();
        let second = session.begin_load_more();

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(session.state(), SessionState::LoadingMore);
    }

    #[rstest]
    fn walks_to_exhaustion_with_offsets_following_length(mut session: GallerySession) {
        let data = catalogue(30);
        let ticket = session.begin_initialize(FilterSpec::default());
        let page = serve(&ticket, &data);
        session.complete(ticket, page);

        let mut offsets = Vec::new();
        while let Some(ticket) = session.begin_load_more() {
            offsets.push(ticket.request().offset());
            let page = serve(&ticket, &data);
            session.complete(ticket, page);
        }

        assert_eq!(offsets, vec![12, 24]);
        assert_eq!(session.photos().len(), 30);
        assert_eq!(session.page(), 3);
        assert_eq!(session.state(), SessionState::Ready { has_more: false });
    }

    #[rstest]
    fn stale_generation_is_discarded(mut session: GallerySession) {
        let data = catalogue(30);
        let old = session.begin_initialize(FilterSpec::default().with_lighting("soft"));
        let fresh = session.begin_initialize(FilterSpec::default());

        let late = serve(&old, &data);
        assert_eq!(session.complete(old, late), LoadOutcome::Stale);
        assert!(session.photos().is_empty());

        let page = serve(&fresh, &data);
        assert!(matches!(
            session.complete(fresh, page),
            LoadOutcome::Applied { .. }
        ));
    }

    #[rstest]
    fn failed_load_more_keeps_results_and_allows_retry(mut session: GallerySession) {
        let data = catalogue(30);
        let ticket = session.begin_initialize(FilterSpec::default());
        let page = serve(&ticket, &data);
        session.complete(ticket, page);

        let ticket = session.begin_load_more().expect("ready with more");
        let outcome = session.complete(ticket, Err(Error::load_failed("offline")));

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(session.photos().len(), 12);
        assert_eq!(session.state(), SessionState::Ready { has_more: true });
        assert!(session.last_error().is_some());

        let retry = session.begin_load_more().expect("retry allowed");
        assert_eq!(retry.request().offset(), 12);
    }

    #[rstest]
    fn failed_initial_load_returns_to_idle(mut session: GallerySession) {
        let ticket = session.begin_initialize(FilterSpec::default());
        session.complete(ticket, Err(Error::load_failed("offline")));

        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.begin_load_more().is_none());
    }

    #[rstest]
    fn duplicate_ids_are_not_appended(mut session: GallerySession) {
        let ticket = session.begin_initialize(FilterSpec::default());
        let request = ticket.request();
        let page = Page::new(vec![photo(1), photo(1), photo(2)], request, 3);

        let outcome = session.complete(ticket, Ok(page));

        assert_eq!(outcome, LoadOutcome::Applied { appended: 2, has_more: false });
    }

    #[rstest]
    fn empty_first_page_is_exhausted(mut session: GallerySession) {
        let ticket = session.begin_initialize(FilterSpec::default());
        let page = serve(&ticket, &[]);
        session.complete(ticket, page);

        assert_eq!(session.state(), SessionState::Ready { has_more: false });
        assert!(session.photos().is_empty());
    }
}
