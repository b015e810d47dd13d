//! Paged-list value objects.

/// Page size used when the caller does not supply a usable one.
pub const DEFAULT_PAGE_SIZE: i64 = 15;

/// Upper bound for a single page, to keep responses and scans bounded.
pub const MAX_PAGE_SIZE: i64 = 50;

/// A normalised request for one page of an ordered collection.
///
/// Construction never fails: a missing or non-positive page number becomes
/// `1`, a missing or non-positive page size becomes [`DEFAULT_PAGE_SIZE`], and
/// oversized pages are clamped to [`MAX_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: i64,
    page_size: i64,
}

impl PageRequest {
    pub fn new(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        let page_number = page_number.filter(|n| *n > 0).unwrap_or(1);
        let page_size = page_size
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);

        Self {
            page_number,
            page_size,
        }
    }

    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Rows to skip: `(page_number - 1) * page_size`.
    pub fn offset(&self) -> i64 {
        (self.page_number - 1).saturating_mul(self.page_size)
    }

    /// Rows to take.
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One window of a collection plus the size of the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_items: i64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> i64 {
        if self.total_items == 0 {
            return 0;
        }
        (self.total_items + self.page_size - 1) / self.page_size
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages()
    }

    /// Converts the items while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_items: self.total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PageRequest::new(None, None);
        assert_eq!(page.page_number(), 1);
        assert_eq!(page.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_non_positive_page_number_is_first_page() {
        assert_eq!(PageRequest::new(Some(0), Some(5)), PageRequest::new(Some(1), Some(5)));
        assert_eq!(PageRequest::new(Some(-3), Some(5)), PageRequest::new(None, Some(5)));
    }

    #[test]
    fn test_page_size_clamped_to_maximum() {
        let page = PageRequest::new(Some(1), Some(10_000));
        assert_eq!(page.page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_non_positive_page_size_uses_default() {
        assert_eq!(PageRequest::new(None, Some(0)).page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(PageRequest::new(None, Some(-1)).page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_offset_and_limit() {
        let page = PageRequest::new(Some(2), Some(2));
        assert_eq!(page.offset(), 2);
        assert_eq!(page.limit(), 2);

        let page = PageRequest::new(Some(3), Some(20));
        assert_eq!(page.offset(), 40);
    }

    #[test]
    fn test_total_pages() {
        let page: Page<()> = Page {
            items: vec![],
            page_number: 1,
            page_size: 2,
            total_items: 5,
        };
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());

        let empty: Page<()> = Page {
            items: vec![],
            page_number: 1,
            page_size: 15,
            total_items: 0,
        };
        assert_eq!(empty.total_pages(), 0);
        assert!(!empty.has_next());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Page {
            items: vec![1, 2],
            page_number: 2,
            page_size: 2,
            total_items: 5,
        };
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!(mapped.total_items, 5);
        assert_eq!(mapped.page_number, 2);
    }
}
