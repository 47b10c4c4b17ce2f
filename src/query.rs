//! Query parameters for the entries document: the [`Query`] trait and the
//! [`EntriesQuery`] builder.
//!
//! Every parameter is an advisory server-side hint. The client never assumes
//! the service honored them; pagination and slug lookup are re-done locally
//! over whatever document comes back.

use url::Url;

/// Trait implemented by query builders. Provides URL serialization.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Query parameters accepted by `system/base.json`.
#[derive(Clone, Debug)]
pub struct EntriesQuery {
    /// Page number (1-indexed). Defaults to 1.
    pub page: Option<i64>,
    /// Entries per page. Defaults to 10.
    pub limit: Option<i64>,
    /// Slug hint for single-entry lookup. `None` sends no slug parameter.
    pub slug: Option<String>,
}

impl Default for EntriesQuery {
    fn default() -> EntriesQuery {
        EntriesQuery {
            page: Some(1),
            limit: Some(10),
            slug: None,
        }
    }
}

impl EntriesQuery {
    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of entries per page.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the slug hint.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// A query carrying only a slug hint, used by single-entry lookup.
    pub(crate) fn slug_only(slug: &str) -> Self {
        EntriesQuery {
            page: None,
            limit: None,
            slug: Some(slug.to_string()),
        }
    }
}

impl Query for EntriesQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(page) = self.page {
            url.query_pairs_mut()
                .append_pair("page", &page.to_string());
        };
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        };
        if let Some(slug) = &self.slug {
            url.query_pairs_mut().append_pair("slug", slug);
        };
        url
    }
}
