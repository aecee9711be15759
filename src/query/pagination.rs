//! Pagination arithmetic for list queries.

use serde::{Deserialize, Serialize};

use crate::config::RepoConfig;
use crate::request::ListRequest;

/// Normalized pagination parameters, 1-indexed.
///
/// Raw request values are normalized once at construction: absent or
/// non-positive page sizes fall back to the configured default (clamped to
/// the configured maximum when one is set), absent or non-positive page
/// numbers fall back to 1. Callers can pass user input through unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    page_size: u32,
    page_number: u32,
}

impl Pagination {
    /// Page size used when neither the request nor the config supplies one.
    pub const DEFAULT_PAGE_SIZE: u32 = 10;

    /// Normalize raw values against a configuration.
    pub fn resolve(
        page_size: Option<i32>,
        page_number: Option<i32>,
        config: &RepoConfig,
    ) -> Self {
        let default_size = config.default_page_size.max(1);
        let mut page_size = match page_size {
            Some(size) if size > 0 => size as u32,
            _ => default_size,
        };
        if let Some(max) = config.max_page_size {
            page_size = page_size.min(max.max(1));
        }
        let page_number = match page_number {
            Some(number) if number > 0 => number as u32,
            _ => 1,
        };
        Self {
            page_size,
            page_number,
        }
    }

    /// Normalize a full list request.
    pub fn from_request(request: &ListRequest, config: &RepoConfig) -> Self {
        Self::resolve(request.page_size, request.page_number, config)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Elements skipped before the page starts.
    pub fn skip(&self) -> usize {
        (self.page_number as usize - 1) * self.page_size as usize
    }

    /// Maximum elements in the page.
    pub fn take(&self) -> usize {
        self.page_size as usize
    }

    /// Skip plus the effective take for a known total: a window reaching
    /// past the end shrinks to the remaining tail (possibly empty) rather
    /// than erroring.
    pub fn window(&self, total: usize) -> (usize, usize) {
        let skip = self.skip();
        let take = self.take().min(total.saturating_sub(skip));
        (skip, take)
    }

    /// Total pages for a known total count (ceiling division).
    pub fn total_pages(&self, total_count: u64) -> u32 {
        total_count.div_ceil(u64::from(self.page_size)) as u32
    }

    pub fn has_next_page(&self, total_count: u64) -> bool {
        ((self.skip() + self.take()) as u64) < total_count
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_number > 1
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_size: Self::DEFAULT_PAGE_SIZE,
            page_number: 1,
        }
    }
}
