//! Client-side paging of the results table.

use std::ops::Range;

use crate::models::ResultTarget;

/// Selectable page sizes, cycled with `s`.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 20, 50];

/// Pagination is only offered above this many rows.
pub const PAGINATION_THRESHOLD: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based page index
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: PAGE_SIZE_OPTIONS[0],
        }
    }
}

impl Pagination {
    /// Controls appear only for the aggregate view with more than
    /// [`PAGINATION_THRESHOLD`] rows.
    pub fn is_visible(target: ResultTarget, total: usize) -> bool {
        target.is_all_users() && total > PAGINATION_THRESHOLD
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Row indices shown on the current page.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    pub fn next_page(&mut self, total: usize) -> bool {
        if self.page + 1 < self.page_count(total) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to the page containing row `index`.
    pub fn show_row(&mut self, index: usize) {
        self.page = index / self.page_size;
    }

    /// Advance to the next size in [`PAGE_SIZE_OPTIONS`], keeping `anchor_row`
    /// on screen.
    pub fn cycle_page_size(&mut self, anchor_row: usize) {
        let current = PAGE_SIZE_OPTIONS
            .iter()
            .position(|size| *size == self.page_size)
            .unwrap_or(0);
        self.page_size = PAGE_SIZE_OPTIONS[(current + 1) % PAGE_SIZE_OPTIONS.len()];
        self.show_row(anchor_row);
    }
}
