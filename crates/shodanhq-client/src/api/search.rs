//! Search endpoint.

use crate::ShodanClient;
use shodanhq_core::{Result, SearchResult};
use tracing::instrument;

/// Default number of hosts per page
pub const DEFAULT_LIMIT: u32 = 50;

impl ShodanClient {
    /// Search for hosts matching a query, using the same syntax as the website
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let results = client.search("apache country:DE").limit(10).send().await?;
    /// println!("{} total, {} on this page", results.total, results.len());
    /// ```
    #[must_use]
    pub fn search(&self, query: impl Into<String>) -> SearchRequestBuilder<'_> {
        SearchRequestBuilder::new(self, query.into())
    }
}

/// Builder for search requests
#[derive(Debug)]
pub struct SearchRequestBuilder<'a> {
    client: &'a ShodanClient,
    query: String,
    offset: u32,
    limit: u32,
}

impl<'a> SearchRequestBuilder<'a> {
    fn new(client: &'a ShodanClient, query: String) -> Self {
        Self {
            client,
            query,
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Starting position of the result cursor
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Number of hosts to return; the service caps this at 100
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Execute the search
    #[instrument(skip(self), fields(api = "search", query = %self.query, offset = self.offset, limit = self.limit))]
    pub async fn send(self) -> Result<SearchResult> {
        let offset = self.offset.to_string();
        let limit = self.limit.to_string();
        let params = [
            ("q", self.query.as_str()),
            ("o", offset.as_str()),
            ("l", limit.as_str()),
        ];

        let record = self.client.send_request("search", &params).await?;
        SearchResult::from_record(&record)
    }
}
