//! Pagination helpers for the team member listing
//!
//! Mattermost pages are zero-indexed and capped at 200 items. The collection
//! signals exhaustion by answering with an empty JSON array.

/// Default number of users requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 60;

/// Largest `per_page` value Mattermost honours.
pub const MAX_PAGE_SIZE: usize = 200;

/// Sort key that orders team members by last activity, oldest first.
pub const SORT_LAST_ACTIVITY: &str = "last_activity_at";

/// Parameters for one page request.
///
/// # Example
/// ```ignore
/// let params = PageRequest::new(3).page_size(100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: usize,
    /// Number of items per page
    pub page_size: usize,
    /// Sort field name
    pub sort: &'static str,
}

impl PageRequest {
    /// Request the given page with default size and last-activity ordering.
    pub fn new(page: usize) -> Self {
        Self {
            page,
            page_size: DEFAULT_PAGE_SIZE,
            sort: SORT_LAST_ACTIVITY,
        }
    }

    /// Set the page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// The request for the page after this one.
    pub fn next(&self) -> Self {
        Self {
            page: self.page + 1,
            ..self.clone()
        }
    }

    /// Convert to query string parameters for the users endpoint.
    pub fn to_query_params(&self, team_id: &str) -> Vec<(&'static str, String)> {
        vec![
            ("in_team", team_id.to_string()),
            ("sort", self.sort.to_string()),
            ("per_page", self.page_size.to_string()),
            ("page", self.page.to_string()),
        ]
    }
}

/// Whether a raw response body is the empty-array end-of-collection sentinel.
pub fn is_exhausted_body(body: &str) -> bool {
    let trimmed = body.trim();
    trimmed.starts_with('[')
        && trimmed.ends_with(']')
        && trimmed[1..trimmed.len() - 1].trim().is_empty()
}
