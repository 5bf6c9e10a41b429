//! Page envelope and slicing.

use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// One page of an ordered sequence.
///
/// ## Invariants
/// - `items` holds at most `request.limit()` records.
/// - `has_more` is true exactly when the window ends before `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    request: PageRequest,
    total: usize,
    has_more: bool,
}

impl<T> Page<T> {
    /// Wrap an already-sliced window of a sequence holding `total` records.
    ///
    /// Items beyond the request limit are dropped so the envelope never
    /// reports more records than were asked for.
    #[must_use]
    pub fn new(mut items: Vec<T>, request: PageRequest, total: usize) -> Self {
        items.truncate(request.limit());
        Self {
            items,
            request,
            total,
            has_more: request.end() < total,
        }
    }

    /// Records in this page, in sequence order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page and return its records.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// The request this page answers.
    #[must_use]
    pub const fn request(&self) -> PageRequest {
        self.request
    }

    /// Length of the full sequence the page was cut from.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether records remain after this page.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Number of records in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform every record while keeping the paging metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            request: self.request,
            total: self.total,
            has_more: self.has_more,
        }
    }
}

/// Slice `items` according to `request`.
///
/// The window is clipped to the sequence bounds; a window starting at or past
/// the end yields an empty page with `has_more == false`.
///
/// # Examples
///
/// ```
/// use pagination::{PageRequest, paginate};
///
/// let items = [1, 2, 3];
/// let page = paginate(&items, PageRequest::page(5, 2).expect("valid request"));
/// assert!(page.is_empty());
/// assert!(!page.has_more());
/// ```
#[must_use]
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let total = items.len();
    let start = request.offset().min(total);
    let end = request.end().min(total);
    let slice = items.get(start..end).unwrap_or_default();
    Page::new(slice.to_vec(), request, total)
}
