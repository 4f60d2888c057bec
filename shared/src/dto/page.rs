//! Pagination envelope and list query parameters.

use serde::{Deserialize, Serialize};

/// Default page size used by every list endpoint.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Paged list envelope returned by every list endpoint.
///
/// `total` is the authoritative record count for pagination math; the length
/// of `items` only describes the current page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl<T> Page<T> {
    /// Number of pages implied by `total` at the given page size.
    /// Zero records means zero pages, not one empty page.
    pub fn total_pages(&self, limit: u64) -> u64 {
        total_pages(self.total, limit)
    }
}

/// `ceil(total / limit)` with the `total = 0` edge pinned to zero pages.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// Free-text name filter applied to list queries.
///
/// An empty filter contributes no query parameters at all, matching the
/// backend's "no filter" behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NameFilter {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Query parameters for this filter, empty when unset.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match &self.name {
            Some(name) => vec![("name", name.clone())],
            None => Vec::new(),
        }
    }
}

/// Offset-based pagination request: `skip` records, return at most `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub skip: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// First page with a custom page size.
    pub fn with_limit(limit: u64) -> Self {
        Self { skip: 0, limit }
    }

    /// One-based page index derived from the current offset.
    pub fn current_page(&self) -> u64 {
        if self.limit == 0 {
            return 1;
        }
        self.skip / self.limit + 1
    }

    /// Jump to a one-based page index, recomputing the offset.
    pub fn goto_page(&mut self, page: u64) {
        self.skip = page.saturating_sub(1) * self.limit;
    }

    /// Reset to the first page, keeping the page size.
    pub fn reset(&mut self) {
        self.skip = 0;
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("skip", self.skip.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_envelope_decodes_with_defaults() {
        let page: Page<String> = serde_json::from_value(json!({
            "items": ["a", "b"],
            "total": 42
        }))
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 42);
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(12, 20), 1);
    }

    #[test]
    fn page_request_math() {
        let mut req = PageRequest::default();
        assert_eq!(req.current_page(), 1);

        req.goto_page(3);
        assert_eq!(req.skip, 40);
        assert_eq!(req.current_page(), 3);

        req.reset();
        assert_eq!(req.skip, 0);
        assert_eq!(req.current_page(), 1);

        // Page 0 clamps to the first page rather than underflowing.
        req.goto_page(0);
        assert_eq!(req.skip, 0);
    }

    #[test]
    fn empty_filter_builds_no_params() {
        assert!(NameFilter::default().query().is_empty());
        assert_eq!(
            NameFilter::named("Margit").query(),
            vec![("name", "Margit".to_string())]
        );
    }

    #[test]
    fn identical_requests_build_identical_queries() {
        let a = PageRequest { skip: 40, limit: 20 };
        let b = PageRequest { skip: 40, limit: 20 };
        assert_eq!(a.query(), b.query());
    }
}
