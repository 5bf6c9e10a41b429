//! Query-string codec for search filters.
//!
//! Parameters: repeated `lighting`, `colorTone`, and `photographer`; single
//! `orientation`, `featured`, and `q`. Unknown parameters are ignored so
//! shared links keep working as the parameter set grows.

use serde_json::json;
use url::form_urlencoded;

use crate::domain::{Error, FilterSpec, OrientationFilter, PhotographerId};

const LIGHTING: &str = "lighting";
const COLOR_TONE: &str = "colorTone";
const PHOTOGRAPHER: &str = "photographer";
const ORIENTATION: &str = "orientation";
const FEATURED: &str = "featured";
const QUERY: &str = "q";

fn invalid_parameter(field: &str, value: &str, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_parameter",
    }))
}

fn parse_photographer(value: &str) -> Result<PhotographerId, Error> {
    value.trim().parse::<u64>().map(PhotographerId::new).map_err(|_| {
        invalid_parameter(
            PHOTOGRAPHER,
            value,
            format!("{PHOTOGRAPHER} must be a numeric id"),
        )
    })
}

fn parse_featured(value: &str) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" => Ok(false),
        "true" | "1" => Ok(true),
        _ => Err(invalid_parameter(
            FEATURED,
            value,
            format!("{FEATURED} must be true or false"),
        )),
    }
}

/// Build a filter from a URL query string, with or without the leading `?`.
///
/// # Errors
///
/// `InvalidRequest` when `orientation`, `photographer`, or `featured` carry a
/// value that cannot be parsed. The error details name the offending field.
///
/// # Examples
/// ```
/// use gallery::inbound::parse_filter;
///
/// let filter = parse_filter("?lighting=soft&lighting=studio&q=harbour")
///     .expect("valid query");
/// assert_eq!(filter.lighting().len(), 2);
/// assert_eq!(filter.query(), Some("harbour"));
/// ```
pub fn parse_filter(query: &str) -> Result<FilterSpec, Error> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut filter = FilterSpec::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            LIGHTING => {
                filter.add_lighting(&value);
            }
            COLOR_TONE => {
                filter.add_color_tone(&value);
            }
            PHOTOGRAPHER => {
                filter.add_photographer(parse_photographer(&value)?);
            }
            ORIENTATION => {
                let orientation = value.parse::<OrientationFilter>().map_err(|err| {
                    invalid_parameter(ORIENTATION, &value, err.to_string())
                })?;
                filter.set_orientation(orientation);
            }
            FEATURED => filter.set_featured(parse_featured(&value)?),
            QUERY => filter.set_query(&value),
            _ => {}
        }
    }

    Ok(filter)
}

/// Serialise a filter as a query string without the leading `?`.
///
/// Empty sets, `orientation=all`, an absent query, and `featured=false` are
/// omitted, so the default filter serialises to an empty string.
pub fn to_query_string(filter: &FilterSpec) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for tag in filter.lighting() {
        serializer.append_pair(LIGHTING, tag);
    }
    for tag in filter.color_tone() {
        serializer.append_pair(COLOR_TONE, tag);
    }
    for id in filter.photographer() {
        serializer.append_pair(PHOTOGRAPHER, &id.to_string());
    }
    if filter.orientation() != OrientationFilter::All {
        serializer.append_pair(ORIENTATION, filter.orientation().as_str());
    }
    if filter.featured() {
        serializer.append_pair(FEATURED, "true");
    }
    if let Some(query) = filter.query() {
        serializer.append_pair(QUERY, query);
    }
    serializer.finish()
}
