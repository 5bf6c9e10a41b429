//! Error types for page request validation.

use thiserror::Error;

/// Errors raised when constructing a [`PageRequest`](crate::PageRequest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Page numbers are 1-based; zero does not address any page.
    #[error("page number must be at least 1")]
    ZeroPageNumber,

    /// A page must hold at least one record.
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    /// The requested page starts beyond the addressable range.
    #[error("page {number} with size {size} overflows the addressable range")]
    OffsetOverflow {
        /// Requested 1-based page number.
        number: usize,
        /// Requested page size.
        size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_number_formats_correctly() {
        assert_eq!(
            PageRequestError::ZeroPageNumber.to_string(),
            "page number must be at least 1"
        );
    }

    #[test]
    fn offset_overflow_formats_correctly() {
        let err = PageRequestError::OffsetOverflow {
            number: usize::MAX,
            size: 12,
        };
        assert_eq!(
            err.to_string(),
            format!("page {} with size 12 overflows the addressable range", usize::MAX)
        );
    }
}
