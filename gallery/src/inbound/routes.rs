//! Route table mapping URL paths to gallery screens.

use std::fmt;

use tracing::debug;
use url::Url;

use super::query::{parse_filter, to_query_string};
use crate::domain::{Error, FilterSpec, GalleryView, PhotoId, Username};

const BASE: &str = "http://gallery.invalid/";

/// A screen reachable by URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/gallery`
    Gallery,
    /// `/gallery/featured`
    FeaturedGallery,
    /// `/photo/:id`
    Photo(PhotoId),
    /// `/photographer/:username`
    Photographer(Username),
    /// `/search` with the filter taken from the query string.
    Search(FilterSpec),
    NotFound,
}

impl Route {
    /// Resolve a path, optionally with a query string, or an absolute URL.
    ///
    /// Trailing slashes are ignored. Paths that match no screen, photo ids
    /// that are not numbers, and segments that cannot be usernames all
    /// resolve to [`Route::NotFound`].
    ///
    /// # Errors
    ///
    /// `InvalidRequest` when the input is not a URL, or when a `/search`
    /// query string carries malformed filter parameters.
    ///
    /// # Examples
    /// ```
    /// use gallery::inbound::Route;
    ///
    /// let route = Route::parse("/gallery/featured/").expect("valid path");
    /// assert_eq!(route, Route::FeaturedGallery);
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        let url = Url::parse(BASE)
            .and_then(|base| base.join(input))
            .map_err(|err| Error::invalid_request(format!("invalid route '{input}': {err}")))?;

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        let route = match segments.as_slice() {
            [] => Self::Home,
            ["gallery"] => Self::Gallery,
            ["gallery", "featured"] => Self::FeaturedGallery,
            ["photo", id] => id
                .parse::<u64>()
                .map_or(Self::NotFound, |raw| Self::Photo(PhotoId::new(raw))),
            ["photographer", username] => {
                Username::new(username).map_or(Self::NotFound, Self::Photographer)
            }
            ["search"] => Self::Search(parse_filter(url.query().unwrap_or_default())?),
            _ => Self::NotFound,
        };
        debug!(path = url.path(), ?route, "route resolved");
        Ok(route)
    }

    /// The gallery listing this route shows directly, if any.
    ///
    /// Photographer routes need a username lookup first; see
    /// [`crate::domain::PhotoService::profile`].
    pub fn view(&self) -> Option<GalleryView> {
        match self {
            Self::Home => Some(GalleryView::Home),
            Self::Gallery => Some(GalleryView::Gallery),
            Self::FeaturedGallery => Some(GalleryView::Featured),
            Self::Search(filter) => Some(GalleryView::Search(filter.clone())),
            Self::Photo(_) | Self::Photographer(_) | Self::NotFound => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Gallery => f.write_str("/gallery"),
            Self::FeaturedGallery => f.write_str("/gallery/featured"),
            Self::Photo(id) => write!(f, "/photo/{id}"),
            Self::Photographer(username) => write!(f, "/photographer/{username}"),
            Self::Search(filter) => {
                let query = to_query_string(filter);
                if query.is_empty() {
                    f.write_str("/search")
                } else {
                    write!(f, "/search?{query}")
                }
            }
            Self::NotFound => f.write_str("/404"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::{ErrorCode, OrientationFilter};

    #[rstest]
    #[case::root("/", Route::Home)]
    #[case::empty("", Route::Home)]
    #[case::gallery("/gallery", Route::Gallery)]
    #[case::trailing_slash("/gallery/", Route::Gallery)]
    #[case::featured("/gallery/featured", Route::FeaturedGallery)]
    #[case::photo("/photo/42", Route::Photo(PhotoId::new(42)))]
    #[case::bad_photo_id("/photo/abc", Route::NotFound)]
    #[case::unknown("/about", Route::NotFound)]
    #[case::too_deep("/gallery/featured/extra", Route::NotFound)]
    #[case::bad_username("/photographer/a%20b", Route::NotFound)]
    fn resolves_paths(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(Route::parse(path).expect("valid path"), expected);
    }

    #[test]
    fn photographer_usernames_are_normalised() {
        let route = Route::parse("/photographer/Ada_Lovelace").expect("valid path");
        let expected = Username::new("ada_lovelace").expect("valid username");
        assert_eq!(route, Route::Photographer(expected));
    }

    #[test]
    fn absolute_urls_are_accepted() {
        let route = Route::parse("https://photos.example.com/search?orientation=portrait")
            .expect("valid url");
        let filter = FilterSpec::default().with_orientation(OrientationFilter::Portrait);
        assert_eq!(route, Route::Search(filter));
    }

    #[test]
    fn malformed_search_query_is_invalid_request() {
        let err = Route::parse("/search?photographer=x").expect_err("bad query");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[case(Route::Home, Some(GalleryView::Home))]
    #[case(Route::FeaturedGallery, Some(GalleryView::Featured))]
    #[case(Route::Photo(PhotoId::new(1)), None)]
    #[case(Route::NotFound, None)]
    fn maps_routes_to_views(#[case] route: Route, #[case] view: Option<GalleryView>) {
        assert_eq!(route.view(), view);
    }

    #[test]
    fn search_routes_render_their_filter() {
        let route = Route::Search(FilterSpec::default().with_lighting("soft"));
        assert_eq!(route.to_string(), "/search?lighting=soft");
        assert_eq!(Route::Search(FilterSpec::default()).to_string(), "/search");
    }
}
