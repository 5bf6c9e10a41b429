//! Validated page requests.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::PageRequestError;

/// A validated request for one window of an ordered sequence.
///
/// Requests are either expressed as a 1-based page number with a fixed page
/// size, or as an offset window. Page `n` of size `s` is the window starting
/// at `(n - 1) * s` holding at most `s` records, so both forms share the same
/// clipping and `has_more` rules.
///
/// # Examples
///
/// ```
/// use pagination::PageRequest;
///
/// let request = PageRequest::page(3, 12).expect("valid request");
/// assert_eq!(request.offset(), 24);
/// assert_eq!(request.limit(), 12);
/// assert_eq!(request.page_number(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    offset: usize,
    limit: NonZeroUsize,
}

impl PageRequest {
    /// Build a request for the 1-based page `number` holding `size` records.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError::ZeroPageNumber`] when `number` is zero,
    /// [`PageRequestError::ZeroPageSize`] when `size` is zero, and
    /// [`PageRequestError::OffsetOverflow`] when the start offset cannot be
    /// represented.
    pub fn page(number: usize, size: usize) -> Result<Self, PageRequestError> {
        let index = number
            .checked_sub(1)
            .ok_or(PageRequestError::ZeroPageNumber)?;
        let limit = NonZeroUsize::new(size).ok_or(PageRequestError::ZeroPageSize)?;
        let offset = index
            .checked_mul(size)
            .ok_or(PageRequestError::OffsetOverflow { number, size })?;
        Ok(Self { offset, limit })
    }

    /// Build a request for at most `limit` records starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError::ZeroPageSize`] when `limit` is zero.
    pub fn window(offset: usize, limit: usize) -> Result<Self, PageRequestError> {
        let limit = NonZeroUsize::new(limit).ok_or(PageRequestError::ZeroPageSize)?;
        Ok(Self { offset, limit })
    }

    /// Build a window from an already validated limit.
    #[must_use]
    pub const fn with_limit(offset: usize, limit: NonZeroUsize) -> Self {
        Self { offset, limit }
    }

    /// Zero-based offset of the first requested record.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Maximum number of records in the window.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit.get()
    }

    /// Exclusive end offset of the window, saturating at `usize::MAX`.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset.saturating_add(self.limit.get())
    }

    /// 1-based number of the page this window falls in when every page holds
    /// `limit` records.
    #[must_use]
    pub const fn page_number(&self) -> usize {
        self.offset.div_euclid(self.limit.get()).saturating_add(1)
    }

    /// The window immediately following this one, with the same limit.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            offset: self.end(),
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::first_page(1, 12, 0)]
    #[case::second_page(2, 12, 12)]
    #[case::profile_increment(3, 6, 12)]
    fn page_requests_start_at_expected_offset(
        #[case] number: usize,
        #[case] size: usize,
        #[case] offset: usize,
    ) {
        let request = PageRequest::page(number, size).expect("valid request");
        assert_eq!(request.offset(), offset);
        assert_eq!(request.limit(), size);
        assert_eq!(request.page_number(), number);
    }

    #[rstest]
    #[case::zero_number(0, 12, PageRequestError::ZeroPageNumber)]
    #[case::zero_size(1, 0, PageRequestError::ZeroPageSize)]
    #[case::overflow(usize::MAX, 2, PageRequestError::OffsetOverflow { number: usize::MAX, size: 2 })]
    fn rejects_invalid_page_requests(
        #[case] number: usize,
        #[case] size: usize,
        #[case] expected: PageRequestError,
    ) {
        assert_eq!(PageRequest::page(number, size), Err(expected));
    }

    #[test]
    fn window_rejects_zero_limit() {
        assert_eq!(
            PageRequest::window(9, 0),
            Err(PageRequestError::ZeroPageSize)
        );
    }

    #[test]
    fn next_window_follows_previous_end() {
        let request = PageRequest::window(9, 6).expect("valid window");
        let next = request.next();
        assert_eq!(next.offset(), 15);
        assert_eq!(next.limit(), 6);
    }

    #[test]
    fn with_limit_matches_checked_window() {
        let limit = NonZeroUsize::new(6).expect("non-zero");
        assert_eq!(
            PageRequest::with_limit(9, limit),
            PageRequest::window(9, 6).expect("valid window")
        );
    }

    #[test]
    fn end_saturates_instead_of_overflowing() {
        let request = PageRequest::window(usize::MAX - 1, 12).expect("valid window");
        assert_eq!(request.end(), usize::MAX);
    }

    #[test]
    fn serialises_with_camel_case_fields() {
        let request = PageRequest::page(2, 12).expect("valid request");
        let json = serde_json::to_value(request).expect("serialise");
        assert_eq!(json, serde_json::json!({ "offset": 12, "limit": 12 }));
    }
}
