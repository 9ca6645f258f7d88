//! Page arithmetic over a filtered view.
//!
//! Everything here is a pure function of the view length and the page size.
//! Nothing is cached, so page facts can never drift from the view they describe.

use crate::{Error, Result};
use std::num::NonZeroUsize;
use std::ops::Range;

/// Number of items shown per page. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Validate a raw configured value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPageSize`] when `raw < 1`.
    pub fn new(raw: i64) -> Result<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(Error::InvalidPageSize(raw))
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for PageSize {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

/// Number of pages needed for `len` items. Zero when there are no items.
#[must_use]
pub fn page_count(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get())
}

/// Half-open index range of page `page`, or `None` if the page does not exist.
#[must_use]
pub fn page_bounds(page: usize, len: usize, page_size: PageSize) -> Option<Range<usize>> {
    if page >= page_count(len, page_size) {
        return None;
    }
    let start = page * page_size.get();
    let end = (start + page_size.get()).min(len);
    Some(start..end)
}

/// Page that contains item `index`.
#[must_use]
pub fn page_of(index: usize, page_size: PageSize) -> usize {
    index / page_size.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ps(n: i64) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn test_page_size_rejects_non_positive() {
        assert!(matches!(PageSize::new(0), Err(Error::InvalidPageSize(0))));
        assert!(matches!(PageSize::new(-3), Err(Error::InvalidPageSize(-3))));
        assert_eq!(ps(1).get(), 1);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, ps(2)), 0);
        assert_eq!(page_count(1, ps(2)), 1);
        assert_eq!(page_count(4, ps(2)), 2);
        assert_eq!(page_count(5, ps(2)), 3);
        assert_eq!(page_count(5, ps(1)), 5);
        assert_eq!(page_count(3, ps(10)), 1);
    }

    #[test]
    fn test_page_bounds_partial_last_page() {
        assert_eq!(page_bounds(0, 5, ps(2)), Some(0..2));
        assert_eq!(page_bounds(1, 5, ps(2)), Some(2..4));
        assert_eq!(page_bounds(2, 5, ps(2)), Some(4..5));
    }

    #[test]
    fn test_page_bounds_out_of_range() {
        assert_eq!(page_bounds(3, 5, ps(2)), None);
        assert_eq!(page_bounds(0, 0, ps(2)), None);
    }

    #[test]
    fn test_page_of() {
        assert_eq!(page_of(0, ps(2)), 0);
        assert_eq!(page_of(1, ps(2)), 0);
        assert_eq!(page_of(2, ps(2)), 1);
        assert_eq!(page_of(4, ps(2)), 2);
    }
}
