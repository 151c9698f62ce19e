use serde::{Deserialize, Serialize};

/// Page size used when a request does not ask for one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Offset/limit pair applied to repository list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    /// Number of items per page.
    pub per_page: usize,
}

/// A single page of items together with the page navigation data.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Paginated<T> {
    /// Items belonging to the current page.
    pub items: Vec<T>,
    /// 1-based number of the current page.
    pub page: usize,
    /// All available page numbers, in order.
    pub pages: Vec<usize>,
}

impl<T> Paginated<T> {
    /// Wrap a page of items with its position among `total_pages` pages.
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        Self {
            items,
            page,
            pages: (1..=total_pages).collect(),
        }
    }
}
