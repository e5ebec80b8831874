//! Pagination Envelope Module
//!
//! Typed read-only view of the backend's pagination envelope. The cache
//! itself treats responses as opaque JSON; this is a convenience for
//! consumers that render tables and pagers.

use serde::Deserialize;
use serde_json::Value;

// == Page Envelope ==
/// One page of records plus its pagination metadata.
///
/// The backend emits the metadata either at the top level or under a `meta`
/// object depending on the endpoint; both shapes parse.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope {
    /// Records for this page, left as raw JSON for the caller to shape
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(flatten)]
    meta_inline: PageMeta,
    #[serde(default)]
    meta: PageMeta,
}

/// Pagination counters.
#[derive(Debug, Clone, Default, Deserialize)]
struct PageMeta {
    current_page: Option<u64>,
    per_page: Option<u64>,
    total: Option<u64>,
    last_page: Option<u64>,
}

impl PageMeta {
    fn or(&self, fallback: &PageMeta) -> PageMeta {
        PageMeta {
            current_page: self.current_page.or(fallback.current_page),
            per_page: self.per_page.or(fallback.per_page),
            total: self.total.or(fallback.total),
            last_page: self.last_page.or(fallback.last_page),
        }
    }
}

impl PageEnvelope {
    /// Parses a cached response value into an envelope view.
    ///
    /// Returns None if the value is not an object-shaped envelope at all.
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    /// 1-based current page number (default 1 when the backend omits it).
    pub fn current_page(&self) -> u64 {
        self.merged_meta().current_page.unwrap_or(1)
    }

    /// Rows per page (defaults to the page's own length).
    pub fn per_page(&self) -> u64 {
        self.merged_meta()
            .per_page
            .unwrap_or(self.data.len() as u64)
    }

    /// Total records across all pages.
    pub fn total(&self) -> u64 {
        self.merged_meta().total.unwrap_or(self.data.len() as u64)
    }

    /// Last page number.
    pub fn last_page(&self) -> u64 {
        self.merged_meta().last_page.unwrap_or(1)
    }

    fn merged_meta(&self) -> PageMeta {
        // Top-level fields win over the meta object when both are present.
        self.meta_inline.or(&self.meta)
    }
}
