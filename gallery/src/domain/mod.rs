//! Domain primitives, services, and ports.
//!
//! Purpose: model the photo catalogue, the filter predicate, and the
//! browsing session state machine independently of any view technology.
//! Adapters reach the domain only through the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode - stable error category plus message.
//! - Photo, Photographer, FilterSpec - catalogue records and constraints.
//! - GallerySession, GalleryController - paged loading for one view.
//! - InfiniteScrollTrigger - viewport proximity to load decisions.
//! - PhotoService, UserPreferencesService - detail, profile, and user state.

pub mod error;
pub mod filter;
pub mod gallery_controller;
pub mod photo;
pub mod photo_service;
pub mod photographer;
pub mod ports;
pub mod preferences;
pub mod preferences_service;
pub mod scroll;
pub mod session;
pub mod view;

pub use self::error::{Error, ErrorCode};
pub use self::filter::{FilterSpec, FilterValue, OrientationFilter, UnknownOrientation};
pub use self::gallery_controller::GalleryController;
pub use self::photo::{
    Dimensions, Orientation, Photo, PhotoBuilder, PhotoId, PhotoMetadata, PhotoValidationError,
    SQUARE_TOLERANCE_PERCENT,
};
pub use self::photo_service::{DEFAULT_RELATED_LIMIT, PhotoService};
pub use self::photographer::{
    Photographer, PhotographerBuilder, PhotographerId, PhotographerStats,
    PhotographerValidationError, Username,
};
pub use self::preferences::{
    LIKED_PHOTOS_KEY, SAVED_PHOTOS_KEY, SessionUser, USER_KEY, UserPreferences,
};
pub use self::preferences_service::UserPreferencesService;
pub use self::scroll::{
    DEFAULT_SCROLL_THRESHOLD_PX, InfiniteScrollTrigger, ScrollEvent, Viewport,
    drive_infinite_scroll,
};
pub use self::session::{GallerySession, LoadOutcome, LoadTicket, SessionState};
pub use self::view::{GalleryView, PagePlan};
