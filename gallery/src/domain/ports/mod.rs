//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod photo_source;
mod preference_store;

#[cfg(test)]
pub use photo_source::MockPhotoSource;
pub use photo_source::{FixturePhotoSource, PhotoSource, PhotoSourceError};
#[cfg(test)]
pub use preference_store::MockPreferenceStore;
pub use preference_store::{PreferenceStore, PreferenceStoreError, validate_key};
