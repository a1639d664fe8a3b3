//! Page requests and paged results.

/// Largest page size a caller may request.
pub const MAX_PER_PAGE: u64 = 100;

/// Zero-indexed slice of an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    /// Creates a page request, clamping `per_page` into `1..=MAX_PER_PAGE`.
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page,
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Number of rows skipped before this page.
    ///
    /// Returns `None` when the offset does not fit the signed 64-bit range SQL accepts.
    pub fn offset(&self) -> Option<u64> {
        self.page
            .checked_mul(self.per_page)
            .filter(|offset| *offset <= i64::MAX as u64)
    }
}

/// One page of items along with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            per_page: request.per_page,
            total_pages: total.div_ceil(request.per_page),
        }
    }
}
