//! Client-side table paging

use std::ops::Range;

pub const PAGE_SIZES: [usize; 3] = [5, 10, 20];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 0, page_size: DEFAULT_PAGE_SIZE }
    }
}

impl Pagination {
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based page, clamped to the rows that exist
    pub fn page(&self, total: usize) -> usize {
        self.page.min(self.page_count(total) - 1)
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Row indices shown on the current page
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = self.page(total) * self.page_size;
        start.min(total)..(start + self.page_size).min(total)
    }

    pub fn set_page_size(&mut self, size: usize) {
        if PAGE_SIZES.contains(&size) {
            self.page_size = size;
            self.page = 0;
        }
    }

    pub fn next(&mut self, total: usize) {
        self.page = (self.page(total) + 1).min(self.page_count(total) - 1);
    }

    pub fn prev(&mut self, total: usize) {
        self.page = self.page(total).saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        let mut p = Pagination::default();
        assert_eq!(p.range(0), 0..0);
        assert_eq!(p.page_count(0), 1);
        assert_eq!(p.range(23), 0..10);

        p.next(23);
        p.next(23);
        assert_eq!(p.range(23), 20..23);
        p.next(23);
        assert_eq!(p.page(23), 2);

        // rows shrank after a delete + refetch
        assert_eq!(p.range(12), 10..12);
        assert_eq!(p.range(4), 0..4);

        p.prev(23);
        assert_eq!(p.range(23), 10..20);
    }

    #[test]
    fn test_page_size_resets_page() {
        let mut p = Pagination::default();
        p.next(50);
        p.set_page_size(20);
        assert_eq!(p.page(50), 0);
        assert_eq!(p.range(50), 0..20);

        p.set_page_size(7);
        assert_eq!(p.page_size(), 20);
    }
}
