//! Fixed-size pages over the catalog
//!
//! `page_count` is never zero: an empty catalog has one page with no items,
//! so there is always something renderable. An out-of-range page index is
//! clamped to the last page rather than rejected.
//!
//! ```
//! use metcat::catalog::Record;
//! use metcat::pagination::paginate;
//! use std::num::NonZeroUsize;
//!
//! let catalog: Vec<Record> = (0..20u64).map(|i| Record::new(i, format!("R{i}"))).collect();
//! let size = NonZeroUsize::new(10).unwrap();
//!
//! let second = paginate(&catalog, 1, size);
//! assert_eq!(second.items.len(), 10);
//! assert_eq!(second.items[0].id.as_str(), "10");
//! assert_eq!(second.info.page_count, 2);
//! ```

use crate::catalog::Record;
use std::num::NonZeroUsize;

/// Metadata describing one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Zero-based index of the page actually shown
    pub page_index: usize,
    /// Always at least 1
    pub page_count: usize,
    pub page_size: NonZeroUsize,
    /// Number of records being paged over
    pub total: usize,
}

impl PageInfo {
    /// 1-based position of the first item on the page, 0 when empty
    #[must_use]
    pub fn first_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.page_index * self.page_size.get() + 1
        }
    }

    /// 1-based position of the last item on the page, 0 when empty
    #[must_use]
    pub fn last_item(&self) -> usize {
        ((self.page_index + 1) * self.page_size.get()).min(self.total)
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.page_index == 0
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.page_index + 1 >= self.page_count
    }

    /// Human-readable position, e.g. `Page: 1 of 2`
    #[must_use]
    pub fn label(&self) -> String {
        format!("Page: {} of {}", self.page_index + 1, self.page_count)
    }
}

/// A page of records
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    pub items: &'a [Record],
    pub info: PageInfo,
}

/// Number of pages needed for `len` records
#[must_use]
pub fn page_count(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Clamp `page_index` into the valid range for `len` records
#[must_use]
pub fn clamp_page(page_index: usize, len: usize, page_size: NonZeroUsize) -> usize {
    page_index.min(page_count(len, page_size) - 1)
}

/// Slice out page `page_index` of `catalog`
#[must_use]
pub fn paginate(catalog: &[Record], page_index: usize, page_size: NonZeroUsize) -> Page<'_> {
    let total = catalog.len();
    let page_index = clamp_page(page_index, total, page_size);
    let from = (page_index * page_size.get()).min(total);
    let to = ((page_index + 1) * page_size.get()).min(total);

    Page {
        items: &catalog[from..to],
        info: PageInfo {
            page_index,
            page_count: page_count(total, page_size),
            page_size,
            total,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::numbered_records;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn ids(page: &Page<'_>) -> Vec<String> {
        page.items.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_twenty_records_in_pages_of_ten() {
        let catalog = numbered_records(20);

        let first = paginate(&catalog, 0, size(10));
        let second = paginate(&catalog, 1, size(10));

        assert_eq!(ids(&first), (0..10).map(|i| i.to_string()).collect::<Vec<_>>());
        assert_eq!(ids(&second), (10..20).map(|i| i.to_string()).collect::<Vec<_>>());
        assert_eq!(first.info.page_count, 2);
        assert_eq!(second.info.page_count, 2);
    }

    #[test]
    fn test_partial_last_page() {
        let catalog = numbered_records(25);
        let last = paginate(&catalog, 2, size(10));

        assert_eq!(last.items.len(), 5);
        assert_eq!(last.info.page_count, 3);
        assert_eq!(last.info.first_item(), 21);
        assert_eq!(last.info.last_item(), 25);
        assert!(last.info.is_last());
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let catalog = numbered_records(20);
        let page = paginate(&catalog, 99, size(10));

        assert_eq!(page.info.page_index, 1);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[0].id.as_str(), "10");
    }

    #[test]
    fn test_empty_catalog_has_one_empty_page() {
        let page = paginate(&[], 0, size(10));

        assert!(page.items.is_empty());
        assert_eq!(page.info.page_count, 1);
        assert_eq!(page.info.page_index, 0);
        assert_eq!(page.info.first_item(), 0);
        assert_eq!(page.info.last_item(), 0);
        assert!(page.info.is_first());
        assert!(page.info.is_last());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, size(10)), 1);
        assert_eq!(page_count(1, size(10)), 1);
        assert_eq!(page_count(10, size(10)), 1);
        assert_eq!(page_count(11, size(10)), 2);
        assert_eq!(page_count(7, size(1)), 7);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 0, size(10)), 0);
        assert_eq!(clamp_page(5, 0, size(10)), 0);
        assert_eq!(clamp_page(2, 30, size(10)), 2);
        assert_eq!(clamp_page(3, 30, size(10)), 2);
    }

    #[test]
    fn test_label_is_one_based() {
        let catalog = numbered_records(20);
        assert_eq!(paginate(&catalog, 0, size(10)).info.label(), "Page: 1 of 2");
        assert_eq!(paginate(&catalog, 1, size(10)).info.label(), "Page: 2 of 2");
    }
}
