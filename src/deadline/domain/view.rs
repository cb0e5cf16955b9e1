//! Listing view context.

use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

/// Route path and active status filter of the listing being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewContext {
    path: String,
    status_filter: Option<String>,
}

impl ViewContext {
    /// Creates a view context from its parts.
    #[must_use]
    pub fn new(path: impl Into<String>, status_filter: Option<String>) -> Self {
        Self {
            path: path.into(),
            status_filter,
        }
    }

    /// Builds a view context from a route path and raw query string.
    ///
    /// The query may carry a leading `?`. The first non-empty value of
    /// `filter_param` becomes the status filter.
    #[must_use]
    pub fn from_location(path: &str, query: &str, filter_param: &str) -> Self {
        let raw_query = query.strip_prefix('?').unwrap_or(query);
        let status_filter = form_urlencoded::parse(raw_query.as_bytes())
            .find(|(key, value)| key == filter_param && !value.is_empty())
            .map(|(_, value)| value.into_owned());
        Self::new(path, status_filter)
    }

    /// Builds a view context from an absolute or root-relative href.
    ///
    /// Returns `None` when the href cannot be resolved.
    #[must_use]
    pub fn from_href(href: &str, filter_param: &str) -> Option<Self> {
        let base = Url::parse("http://localhost/").ok()?;
        let url = base.join(href).ok()?;
        Some(Self::from_location(
            url.path(),
            url.query().unwrap_or_default(),
            filter_param,
        ))
    }

    /// Returns the route path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the status filter value, if any.
    #[must_use]
    pub fn status_filter(&self) -> Option<&str> {
        self.status_filter.as_deref()
    }
}
