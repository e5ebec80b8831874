//! List Query Module
//!
//! Builds the query-parameter set shared by all the dashboard tables:
//! pagination, free-text search, column sorting, and a created-date filter.

mod debounce;

pub use debounce::Debouncer;

use serde::{Deserialize, Serialize};

use crate::key::Params;

// == Sort Order ==
/// Sort direction, serialized as `asc` / `desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire representation of the direction.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

// == List Query ==
/// The filter/sort/pagination state behind a data table.
///
/// `to_params` produces the canonical [`Params`] for the fetch layer. Blank
/// search and date filters are omitted entirely, so "no filter typed yet" and
/// "filter cleared" resolve to the same cache slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number
    pub page: u64,
    /// Rows per page
    pub per_page: u64,
    /// Free-text search term; blank means unfiltered
    pub search: String,
    /// Column to sort by
    pub sort_by: String,
    /// Sort direction
    pub sort_order: SortOrder,
    /// Creation-date filter (YYYY-MM-DD); blank means unfiltered
    pub created_date: String,
}

impl Default for ListQuery {
    /// First page, newest first, matching the tables' initial state.
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            search: String::new(),
            sort_by: "created_at".to_string(),
            sort_order: SortOrder::Desc,
            created_date: String::new(),
        }
    }
}

impl ListQuery {
    /// Creates the default query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style page selection.
    pub fn page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }

    /// Builder-style page size.
    pub fn per_page(mut self, per_page: u64) -> Self {
        self.per_page = per_page;
        self
    }

    /// Builder-style search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Builder-style created-date filter.
    pub fn created_date(mut self, date: impl Into<String>) -> Self {
        self.created_date = date.into();
        self
    }

    // == Toggle Sort ==
    /// Applies a header click: re-clicking the ascending sort column flips it
    /// to descending, anything else sorts that column ascending. Jumps back
    /// to the first page since the row order changed.
    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort_by == column && self.sort_order == SortOrder::Asc {
            self.sort_order = SortOrder::Desc;
        } else {
            self.sort_by = column.to_string();
            self.sort_order = SortOrder::Asc;
        }
        self.page = 1;
    }

    // == To Params ==
    /// Canonical parameter set for the fetch layer.
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("page", self.page)
            .with("per_page", self.per_page)
            .with("sort_by", self.sort_by.as_str())
            .with("sort_order", self.sort_order.as_str());

        let search = self.search.trim();
        if !search.is_empty() {
            params.insert("search", search);
        }
        let created_date = self.created_date.trim();
        if !created_date.is_empty() {
            params.insert("created_date", created_date);
        }
        params
    }
}
