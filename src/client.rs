//! HTTP client for the DirectoryDock data service.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    filter::EntryFilter,
    query::{EntriesQuery, Query},
    types::{
        CategoriesResponse, Category, EntriesDocument, EntriesPage, Filter, FilterableField,
        TransformedEntry,
    },
    Error,
};

const DEFAULT_BASE_URL: &str = "https://directorydock.blob.core.windows.net/files";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for a DirectoryDock directory's hosted JSON snapshot.
///
/// The service serves static documents; all filtering, pagination, and field
/// discovery happen client-side on the fetched document. Each operation issues
/// a single request with a fresh `reqwest::Client` and a 30-second timeout;
/// nothing is cached or retried, and no state is shared between calls.
pub struct Client {
    /// Base URL for the directory's data files. Derived from the API key by
    /// default: `https://directorydock.blob.core.windows.net/files/{api_key}`.
    base_url: String,
}

impl Client {
    /// Creates a client for the directory identified by `api_key`, pointing at
    /// the production DirectoryDock file host.
    pub fn new(api_key: &str) -> Self {
        Self {
            base_url: format!("{}/{}", DEFAULT_BASE_URL, api_key),
        }
    }

    /// Creates a client with an explicit base URL. Used for self-hosted
    /// deployments and for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}/{}", &self.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Transport
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::Transport
            })?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::error!("Resource not found: invalid API key or missing data file");
            return Err(Error::InvalidCredential);
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport
        })?;

        if !status.is_success() {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::Transport);
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            Error::Transport
        })?;

        Ok(parsed)
    }

    /// Fetches the entries document and returns every entry transformed, with
    /// a client-side count. The query's page and limit are passed along as
    /// server-side hints only.
    pub async fn get_entries(&self, query: &EntriesQuery) -> Result<EntriesPage, Error> {
        let document = self
            .get::<EntriesDocument, EntriesQuery>("system/base.json", Some(query))
            .await?;
        let entries: Vec<TransformedEntry> = document
            .entries
            .into_iter()
            .map(|entry| entry.transform())
            .collect();
        Ok(EntriesPage {
            total_entries: entries.len(),
            entries,
        })
    }

    /// Fetches the single entry whose `Slug` field equals `slug`.
    ///
    /// The slug is also sent as a query parameter, but that is advisory; the
    /// lookup is a linear scan of the returned document, first match wins.
    pub async fn get_entry(&self, slug: &str) -> Result<TransformedEntry, Error> {
        let query = EntriesQuery::slug_only(slug);
        let document = self
            .get::<EntriesDocument, EntriesQuery>("system/base.json", Some(&query))
            .await?;
        let entry = document
            .entries
            .into_iter()
            .find(|entry| entry.slug() == Some(slug))
            .ok_or_else(|| Error::NotFound {
                slug: slug.to_string(),
            })?;
        Ok(entry.transform())
    }

    /// Fetches the full entries document and returns the entries matching the
    /// filter, transformed, in document order. Filtering is independent of
    /// pagination; the candidates are always the whole document.
    pub async fn get_entries_by_filter(
        &self,
        filter: &EntryFilter,
    ) -> Result<Vec<TransformedEntry>, Error> {
        let document = self
            .get::<EntriesDocument, EntriesQuery>("system/base.json", None)
            .await?;
        Ok(document
            .entries
            .into_iter()
            .filter(|entry| filter.matches(entry))
            .map(|entry| entry.transform())
            .collect())
    }

    /// Fetches the authoritative filterable-field metadata from the dedicated
    /// filters endpoint.
    pub async fn get_filters(&self) -> Result<Vec<Filter>, Error> {
        self.get::<Vec<Filter>, EntriesQuery>("system/filters.json", None)
            .await
    }

    /// Derives filterable fields by scanning the entries document: every
    /// distinct field name with a `filterable` descriptor, first occurrence in
    /// document order wins. A fallback for deployments without a filters file.
    pub async fn get_filterable_fields(&self) -> Result<Vec<FilterableField>, Error> {
        let document = self
            .get::<EntriesDocument, EntriesQuery>("system/base.json", None)
            .await?;
        Ok(document.filterable_fields())
    }

    /// Fetches the directory's category list, verbatim.
    pub async fn get_categories(&self) -> Result<Vec<Category>, Error> {
        let resp = self
            .get::<CategoriesResponse, EntriesQuery>("system/categories.json", None)
            .await?;
        Ok(resp.categories)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        // Back off to a char boundary so the slice cannot split a multibyte
        // character.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...[truncated]", &body[..cut])
    }
}
