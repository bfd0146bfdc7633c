//! Offset-based pagination for NPS listing endpoints.
//!
//! The API pages with `limit` and `start` query parameters. The first request
//! always uses `start=0`; its `total` decides how many more follow. A further
//! page is requested while `start + limit < total`, so a listing of `total`
//! records costs exactly `ceil(total / limit)` requests (one when `total` is
//! zero). The count of records actually returned is never consulted.

/// Offsets of the pages that follow the first one.
#[derive(Debug, Clone)]
pub struct PageOffsets {
    page_size: u64,
    total: u64,
    next_start: u64,
}

impl PageOffsets {
    /// Offsets after the first page for a listing of `total` records.
    #[must_use]
    pub fn after_first(page_size: u32, total: u64) -> Self {
        let page_size = u64::from(page_size.max(1));
        Self {
            page_size,
            total,
            next_start: page_size,
        }
    }
}

impl Iterator for PageOffsets {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next_start >= self.total {
            return None;
        }
        let start = self.next_start;
        self.next_start = self.next_start.saturating_add(self.page_size);
        Some(start)
    }
}

/// Total number of requests needed for a listing, first page included.
#[must_use]
pub fn request_count(page_size: u32, total: u64) -> u64 {
    let page_size = u64::from(page_size.max(1));
    total.div_ceil(page_size).max(1)
}
