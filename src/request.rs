//! Caller-supplied paging and sorting parameters for one list operation.

use serde::{Deserialize, Serialize};

use crate::query::order::SortDirection;

/// Paging and sorting input for a single list operation.
///
/// All fields are optional on the wire so a web layer can deserialize
/// partial query strings or JSON bodies directly. Absent or non-positive
/// paging values fall back to the configured page size and page 1; the
/// sort field selects a conditional order by name and is ignored when it
/// matches nothing registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListRequest {
    pub page_size: Option<i32>,
    pub page_number: Option<i32>,
    pub sort_field: Option<String>,
    pub sort_direction: SortDirection,
}

impl ListRequest {
    /// Request with everything defaulted: page 1, configured page size,
    /// the builder's default ordering.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page_size: i32, page_number: i32) -> Self {
        self.page_size = Some(page_size);
        self.page_number = Some(page_number);
        self
    }

    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_field = Some(field.into());
        self.sort_direction = direction;
        self
    }
}
