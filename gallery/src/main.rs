//! Gallery entry-point: seeds the catalogue and walks a scripted browsing
//! session through routing, infinite scroll, and preferences.

use std::sync::Arc;

use color_eyre::eyre::{Result, eyre};
use ortho_config::OrthoConfig;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use gallery::domain::{
    DEFAULT_RELATED_LIMIT, GalleryController, GallerySession, InfiniteScrollTrigger, PhotoService,
    ScrollEvent, UserPreferencesService, Viewport, drive_infinite_scroll,
};
use gallery::inbound::Route;
use gallery::outbound::{FilePreferenceStore, InMemoryPhotoSource};
use gallery::startup::{GallerySettings, seed_photo_source};

const VIEWPORT_HEIGHT_PX: u32 = 900;
const ROW_HEIGHT_PX: u32 = 320;

/// Application bootstrap.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        GallerySettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let source = Arc::new(seed_photo_source(&settings)?);
    let controller = GalleryController::new(Arc::clone(&source));
    let photos = PhotoService::new(Arc::clone(&source));

    for path in ["/", "/gallery/featured", "/search?lighting=soft&orientation=portrait"] {
        let route = Route::parse(path)?;
        let Some(view) = route.view() else {
            continue;
        };
        let (mut session, outcome) = controller.open(&view).await;
        info!(route = %route, ?outcome, "view opened");
        scroll_to_end(&controller, &mut session, settings.scroll_threshold).await;
    }

    if let Some(first) = photos.photographers().await?.first() {
        let route = Route::parse(&format!("/photographer/{}", first.username()))?;
        if let Route::Photographer(username) = route {
            let (photographer, view) = photos.profile(username.as_ref()).await?;
            let (session, _) = controller.open(&view).await;
            info!(
                photographer = %photographer.username(),
                portfolio = photographer.stats().photos,
                loaded = session.photos().len(),
                "profile opened"
            );
        }
    }

    if let Route::Photo(id) = Route::parse("/photo/1")? {
        let photo = photos.photo_by_id(id).await?;
        let related = photos.related_photos(id, DEFAULT_RELATED_LIMIT).await?;
        info!(
            photo = %photo.id(),
            orientation = ?photo.orientation(),
            related = related.len(),
            "photo detail resolved"
        );

        let store = FilePreferenceStore::open(settings.preferences_dir())?;
        let preferences = UserPreferencesService::new(Arc::new(store));
        preferences.login("visitor", "Gallery Visitor").await?;
        let liked = preferences.toggle_like(id).await?;
        let saved = preferences.toggle_save(id).await?;
        info!(photo = %id, liked, saved, "preferences updated");
    }

    Ok(())
}

/// Scroll a session to the bottom one row at a time until it is exhausted.
async fn scroll_to_end(
    controller: &GalleryController<InMemoryPhotoSource>,
    session: &mut GallerySession,
    threshold: u32,
) {
    let (events, mut receiver) = mpsc::channel(8);
    let scripted = tokio::spawn(async move {
        let mut scroll_top = 0_u32;
        loop {
            scroll_top = scroll_top.saturating_add(ROW_HEIGHT_PX);
            let viewport = Viewport {
                scroll_top,
                viewport_height: VIEWPORT_HEIGHT_PX,
                content_height: scroll_top.saturating_add(VIEWPORT_HEIGHT_PX),
            };
            if events.send(ScrollEvent::Scrolled(viewport)).await.is_err() {
                break;
            }
        }
    });

    let mut trigger = InfiniteScrollTrigger::new(threshold);
    let loads = drive_infinite_scroll(controller, session, &mut trigger, &mut receiver).await;
    drop(receiver);
    if let Err(error) = scripted.await {
        warn!(error = %error, "scroll script task failed");
    }
    info!(
        loads,
        photos = session.photos().len(),
        total = ?session.total(),
        "scrolled to the end"
    );
}
