//! Outbound adapters implementing the domain ports.
//!
//! - [`InMemoryPhotoSource`] serves a seeded catalogue with simulated latency.
//! - [`InMemoryPreferenceStore`] keeps preferences for the process lifetime.
//! - [`FilePreferenceStore`] persists preferences as JSON files.

mod file_preferences;
mod memory_preferences;
mod memory_source;

pub use file_preferences::FilePreferenceStore;
pub use memory_preferences::InMemoryPreferenceStore;
pub use memory_source::{InMemoryPhotoSource, WORKING_SET_CACHE_CAPACITY};
