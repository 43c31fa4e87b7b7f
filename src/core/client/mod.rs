//! Public client surface + builder.
//! Defaults live in `constants`.

pub(crate) mod constants;

use crate::core::NsError;
use constants::{DEFAULT_BASE_QUERY, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Holds the HTTP client and the provider endpoint. Cheap to clone.
///
/// The client keeps no credentials; the API key travels with each request.
#[derive(Debug, Clone)]
pub struct NsClient {
    http: Client,
    base_query: Url,
}

impl NsClient {
    /// Create a new builder.
    pub fn builder() -> NsClientBuilder {
        NsClientBuilder::default()
    }

    /// Build a client with all defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new() -> Result<Self, NsError> {
        Self::builder().build()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_query(&self) -> &Url {
        &self.base_query
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NsClientBuilder {
    user_agent: Option<String>,
    base_query: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl NsClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the query endpoint (e.g., `https://www.alphavantage.co/query`).
    #[must_use]
    pub fn base_query(mut self, url: Url) -> Self {
        self.base_query = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none, the transport default applies.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default endpoint fails to parse or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<NsClient, NsError> {
        let base_query = match self.base_query {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUERY)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(NsClient { http, base_query })
    }
}
