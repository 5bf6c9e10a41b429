//! Infinite scroll trigger.
//!
//! The trigger turns viewport observations into "load the next page"
//! decisions. It fires when the viewport comes within a threshold of the
//! bottom of the content, or when a sentinel placed after the last photo
//! becomes visible. Once it fires it stays latched until the load settles,
//! so one proximity event never produces overlapping requests.

use tokio::sync::mpsc;
use tracing::debug;

use super::ports::PhotoSource;
use super::{GalleryController, GallerySession, LoadOutcome};

/// Distance from the bottom, in pixels, at which the next page is requested.
pub const DEFAULT_SCROLL_THRESHOLD_PX: u32 = 400;

/// Scroll geometry of the view, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_top: u32,
    pub viewport_height: u32,
    pub content_height: u32,
}

impl Viewport {
    /// Pixels between the bottom of the viewport and the end of the content.
    pub fn distance_from_bottom(self) -> u32 {
        self.content_height
            .saturating_sub(self.scroll_top.saturating_add(self.viewport_height))
    }
}

/// A scroll observation delivered to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEvent {
    /// The viewport moved or resized.
    Scrolled(Viewport),
    /// The end-of-list sentinel entered or left the viewport.
    SentinelVisibility(bool),
}

/// Decides when the next page should load.
#[derive(Debug, Clone)]
pub struct InfiniteScrollTrigger {
    threshold: u32,
    latched: bool,
    exhausted: bool,
    cancelled: bool,
}

impl Default for InfiniteScrollTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD_PX)
    }
}

impl InfiniteScrollTrigger {
    /// Create an armed trigger with the given proximity threshold.
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            latched: false,
            exhausted: false,
            cancelled: false,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// True when no further events will fire.
    pub fn is_finished(&self) -> bool {
        self.cancelled || self.exhausted
    }

    /// Feed an event, returning `true` when a load should start now.
    pub fn observe(&mut self, event: ScrollEvent) -> bool {
        match event {
            ScrollEvent::Scrolled(viewport) => self.on_scroll(viewport),
            ScrollEvent::SentinelVisibility(visible) => self.on_sentinel(visible),
        }
    }

    /// Distance strategy: fire when within the threshold of the bottom.
    pub fn on_scroll(&mut self, viewport: Viewport) -> bool {
        self.fire_if(viewport.distance_from_bottom() < self.threshold)
    }

    /// Sentinel strategy: fire when the sentinel becomes visible.
    pub fn on_sentinel(&mut self, visible: bool) -> bool {
        self.fire_if(visible)
    }

    fn fire_if(&mut self, near_end: bool) -> bool {
        if !near_end || self.latched || self.is_finished() {
            return false;
        }
        self.latched = true;
        true
    }

    /// Re-arm after a load settles. Once `has_more` is false the trigger
    /// stops firing for good.
    pub fn settle(&mut self, has_more: bool) {
        self.latched = false;
        self.exhausted = !has_more;
    }

    /// Stop firing; used when the view is torn down.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// Consume scroll events and load pages until the channel closes, the
/// trigger is cancelled, or the session is exhausted.
///
/// Loads run sequentially; events that arrive while a load is in flight
/// wait in the channel and are judged against the re-armed trigger.
/// Returns the number of loads issued.
pub async fn drive_infinite_scroll<S>(
    controller: &GalleryController<S>,
    session: &mut GallerySession,
    trigger: &mut InfiniteScrollTrigger,
    events: &mut mpsc::Receiver<ScrollEvent>,
) -> usize
where
    S: PhotoSource,
{
    let mut loads = 0;
    trigger.settle(session.has_more());

    while !trigger.is_finished() {
        let Some(event) = events.recv().await else {
            break;
        };
        if !trigger.observe(event) {
            continue;
        }

        let outcome = controller.load_more(session).await;
        if outcome != LoadOutcome::Skipped {
            loads += 1;
        }
        debug!(?outcome, loads, "infinite scroll load settled");
        trigger.settle(session.has_more());
    }

    loads
}
