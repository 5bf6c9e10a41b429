//! Inbound adapters translating URLs into domain requests.
//!
//! [`Route`] resolves paths to screens and [`parse_filter`] turns search
//! query strings into a [`crate::domain::FilterSpec`]. Failures surface as
//! `InvalidRequest` domain errors.

mod query;
mod routes;

pub use query::{parse_filter, to_query_string};
pub use routes::Route;
