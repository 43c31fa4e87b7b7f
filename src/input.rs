//! User-supplied request parameters: the ticker list and the API credential.

use std::fmt;

use crate::core::client::constants::DEFAULT_TICKERS;

/// An Alpha Vantage API key.
///
/// The value is only reachable through [`ApiKey::expose`]; `Debug` and `Display`
/// print a placeholder so the key never ends up in logs or on the page.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw key. Surrounding whitespace is trimmed.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self(raw.trim().to_string())
    }

    /// Returns the raw key for building the request URL.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the key is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Parameters of one invocation.
///
/// `tickers` is passed upstream as typed; symbol syntax is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    /// Comma-separated ticker symbols, e.g. `"AAPL,MSFT"`.
    pub tickers: String,
    /// The user's API key.
    pub api_key: ApiKey,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self {
            tickers: DEFAULT_TICKERS.to_string(),
            api_key: ApiKey::default(),
        }
    }
}

impl RequestParams {
    pub fn new(tickers: impl Into<String>, api_key: impl Into<ApiKey>) -> Self {
        Self {
            tickers: tickers.into(),
            api_key: api_key.into(),
        }
    }

    /// The individual symbols, trimmed, with empty entries dropped. Display only.
    pub fn symbols(&self) -> Vec<&str> {
        self.tickers
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
