//! Fixed-size table pagination

use serde::Serialize;

/// Rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of an ordered sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// 1-based page number that was requested
    pub page: usize,
    /// Number of non-empty pages, `ceil(total_items / page_size)`
    pub total_pages: usize,
    /// Length of the whole sequence
    pub total_items: usize,
    /// Rows on this page; empty past the last page
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a later page has rows
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Map the rows, keeping the page metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// Slices sequences into fixed-size pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// A page size of 0 is raised to 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `len` rows
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Rows `[(page-1)*size, page*size)` clipped to the sequence.
    ///
    /// Page 0 is read as page 1; a page past the end is empty.
    pub fn page<T: Clone>(&self, rows: &[T], page: usize) -> Page<T> {
        let page = page.max(1);
        let start = (page - 1).saturating_mul(self.page_size).min(rows.len());
        let end = start.saturating_add(self.page_size).min(rows.len());

        Page {
            page,
            total_pages: self.total_pages(rows.len()),
            total_items: rows.len(),
            items: rows[start..end].to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_five_rows() {
        let rows: Vec<u32> = (0..25).collect();
        let paginator = Paginator::default();

        assert_eq!(paginator.total_pages(rows.len()), 3);

        let third = paginator.page(&rows, 3);
        assert_eq!(third.items, vec![20, 21, 22, 23, 24]);
        assert_eq!(third.total_pages, 3);
        assert!(!third.has_next());

        let fourth = paginator.page(&rows, 4);
        assert!(fourth.is_empty());
        assert_eq!(fourth.total_pages, 3);
    }

    #[test]
    fn test_pages_reconstruct_rows() {
        let paginator = Paginator::new(10);
        for len in [0usize, 1, 9, 10, 11, 30, 47] {
            let rows: Vec<usize> = (0..len).collect();
            let total = paginator.total_pages(len);

            let rebuilt: Vec<usize> = (1..=total)
                .flat_map(|p| paginator.page(&rows, p).items)
                .collect();
            assert_eq!(rebuilt, rows, "len {}", len);

            assert!(paginator.page(&rows, total + 1).is_empty());
        }
    }

    #[test]
    fn test_empty_sequence() {
        let rows: Vec<u32> = vec![];
        let page = Paginator::default().page(&rows, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let rows: Vec<u32> = (0..15).collect();
        let page = Paginator::default().page(&rows, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 10);
        assert!(page.has_next());
    }

    #[test]
    fn test_huge_page_number() {
        let rows: Vec<u32> = (0..15).collect();
        assert!(Paginator::default().page(&rows, usize::MAX).is_empty());
    }

    #[test]
    fn test_zero_page_size_raised() {
        assert_eq!(Paginator::new(0).page_size(), 1);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let rows: Vec<u32> = (0..12).collect();
        let page = Paginator::default().page(&rows, 2).map(|n| n * 2);
        assert_eq!(page.items, vec![20, 22]);
        assert_eq!(page.total_items, 12);
        assert_eq!(page.page, 2);
    }
}
