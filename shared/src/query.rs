//! List query and pagination types
//!
//! Every paginated listing in the application shares the same rules:
//! pages are 1-based, the page count is `ceil(total / limit)` with a floor
//! of one page, and a requested page past the end clamps to the last page
//! instead of returning an empty list.

use serde::{Deserialize, Serialize};

/// Default rows per page for all listings.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A normalized page request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-based)
    pub page: u32,
    /// Rows per page
    pub limit: u32,
}

impl PageRequest {
    /// Create a request, forcing `page >= 1` and `limit >= 1`.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// First page with the default page size.
    pub fn first() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }

    /// Number of pages needed for `total` rows (at least 1).
    pub fn total_pages(&self, total: u64) -> u32 {
        let pages = ((total as f64) / (self.limit as f64)).ceil() as u32;
        pages.max(1)
    }

    /// Clamp the page into `[1, total_pages]` for the given row count.
    pub fn clamp(&self, total: u64) -> Self {
        Self {
            page: self.page.min(self.total_pages(total)),
            limit: self.limit,
        }
    }

    /// SQL OFFSET for this page.
    pub fn offset(&self) -> i64 {
        ((self.page - 1) as i64) * (self.limit as i64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of results plus paging metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Rows on this page
    pub data: Vec<T>,
    /// Total row count across all pages
    pub total: u64,
    /// Page number (1-based, already clamped)
    pub page: u32,
    /// Rows per page
    pub limit: u32,
    /// Total page count (at least 1)
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, request: PageRequest) -> Self {
        let total_pages = request.total_pages(total);
        Self {
            data,
            total,
            page: request.page.min(total_pages),
            limit: request.limit,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_normalizes_zero() {
        let req = PageRequest::new(0, 0);
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 1);
    }

    #[test]
    fn test_total_pages_ceil_with_floor_one() {
        let req = PageRequest::new(1, 10);
        assert_eq!(req.total_pages(0), 1);
        assert_eq!(req.total_pages(1), 1);
        assert_eq!(req.total_pages(10), 1);
        assert_eq!(req.total_pages(11), 2);
        assert_eq!(req.total_pages(95), 10);
        assert_eq!(req.total_pages(100), 10);
        assert_eq!(req.total_pages(101), 11);
    }

    #[test]
    fn test_clamp_past_last_page() {
        let req = PageRequest::new(99, 10).clamp(25);
        assert_eq!(req.page, 3);

        // Empty table still has one (empty) page.
        let req = PageRequest::new(5, 10).clamp(0);
        assert_eq!(req.page, 1);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(2, 10).offset(), 10);
        assert_eq!(PageRequest::new(4, 25).offset(), 75);
    }

    #[test]
    fn test_paginated_response() {
        let resp = PaginatedResponse::new(vec!["a", "b"], 12, PageRequest::new(2, 10));
        assert_eq!(resp.total, 12);
        assert_eq!(resp.page, 2);
        assert_eq!(resp.total_pages, 2);
        assert!(!resp.is_empty());
    }
}
