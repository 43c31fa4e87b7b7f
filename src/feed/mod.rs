mod api;
mod model;
mod wire;

pub use api::decode_feed;
pub use model::{FeedResponse, NewsItem};

use crate::{NsClient, NsError, input::RequestParams};

/// Ordering the provider applies before returning the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSort {
    Latest,
    Earliest,
    Relevance,
}

impl FeedSort {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "LATEST",
            Self::Earliest => "EARLIEST",
            Self::Relevance => "RELEVANCE",
        }
    }
}

/// A builder for one `NEWS_SENTIMENT` request.
///
/// Only `function`, `tickers` and `apikey` are sent unless `limit` or `sort` is set.
pub struct FeedBuilder {
    client: NsClient,
    params: RequestParams,
    limit: Option<u32>,
    sort: Option<FeedSort>,
}

impl FeedBuilder {
    /// Creates a new `FeedBuilder` for the given tickers and key.
    pub fn new(client: &NsClient, params: &RequestParams) -> Self {
        Self {
            client: client.clone(),
            params: params.clone(),
            limit: None,
            sort: None,
        }
    }

    /// Caps the number of items the provider returns.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the provider-side ordering.
    #[must_use]
    pub const fn sort(mut self, sort: FeedSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Executes the request and returns the feed items in provider order.
    ///
    /// An empty API key fails with `NsError::MissingApiKey` before any request is made.
    ///
    /// # Errors
    ///
    /// Returns `NsError::Upstream` when the provider reports an error, `NsError::NoData`
    /// when the body has no feed, and a transient variant for network, status or JSON
    /// failures.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(tickers = %self.params.tickers))
    )]
    pub async fn fetch(self) -> Result<Vec<NewsItem>, NsError> {
        api::fetch_feed(&self.client, &self.params, self.limit, self.sort).await
    }
}
