//! Page requests, page envelopes, and slicing primitives for gallery feeds.
//!
//! This crate owns the arithmetic behind every paginated view: turning a
//! 1-based page number (or an offset window) into a validated request, slicing
//! an ordered sequence, and reporting whether more records remain. It is
//! independent of gallery domain types so any ordered collection can be paged.
//!
//! # Overview
//!
//! - [`PageRequest`] validates page numbers, page sizes, and offset windows.
//! - [`paginate`] slices a sequence and wraps the result in a [`Page`].
//! - [`Page`] reports the slice, the originating request, the sequence
//!   length, and the `has_more` flag.
//!
//! # Example
//!
//! ```
//! use pagination::{PageRequest, paginate};
//!
//! let photos: Vec<u32> = (1..=20).collect();
//!
//! let first = paginate(&photos, PageRequest::page(1, 12).expect("valid request"));
//! assert_eq!(first.len(), 12);
//! assert!(first.has_more());
//!
//! let second = paginate(&photos, PageRequest::page(2, 12).expect("valid request"));
//! assert_eq!(second.items(), &photos[12..]);
//! assert!(!second.has_more());
//! ```

mod error;
mod page;
mod request;

pub use error::PageRequestError;
pub use page::{Page, paginate};
pub use request::PageRequest;
