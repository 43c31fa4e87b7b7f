use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum NsError {
    /// No API key was supplied, so no request was issued.
    #[error("missing Alpha Vantage API key")]
    MissingApiKey,

    /// The provider answered with its own `"Error Message"` text.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The response decoded, but carried no `"feed"` field.
    #[error("response contains no feed")]
    NoData,

    /// An error occurred during an HTTP request. The request URL is stripped
    /// before this is built, since it carries the API key.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, with the API key redacted.
        url: String,
    },

    /// A feed item held a field that could not be parsed (timestamp or score).
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

/// The four user-visible error classes of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input caught before any network call.
    Precondition,
    /// The provider reported an error.
    Upstream,
    /// The response had no feed.
    Shape,
    /// Network, HTTP status, malformed JSON or bad field values.
    Transient,
}

pub(crate) const MISSING_KEY_MESSAGE: &str = "Please enter your Alpha Vantage API key.";
pub(crate) const NO_DATA_MESSAGE: &str =
    "No data available. Please check your API key and ticker symbols.";

impl NsError {
    /// Classifies this error into the user-facing taxonomy.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingApiKey => ErrorKind::Precondition,
            Self::Upstream(_) => ErrorKind::Upstream,
            Self::NoData => ErrorKind::Shape,
            Self::Http(_) | Self::Url(_) | Self::Json(_) | Self::Status { .. } | Self::Data(_) => {
                ErrorKind::Transient
            }
        }
    }

    /// The message shown to the user on the page.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingApiKey => MISSING_KEY_MESSAGE.to_string(),
            Self::Upstream(msg) => format!("API Error: {msg}"),
            Self::NoData => NO_DATA_MESSAGE.to_string(),
            other => format!("Failed to fetch news sentiment data: {other}"),
        }
    }
}
