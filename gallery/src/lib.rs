//! Photo gallery browsing core.
//!
//! Filtering, paging, and infinite-scroll sessions over a seeded in-memory
//! catalogue, plus user preferences persisted through a pluggable store.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod startup;
