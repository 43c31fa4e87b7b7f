//! Centralized constants for default endpoints, UA and page server settings.

/// UA sent with every feed request.
pub(crate) const USER_AGENT: &str = concat!("news-sentiment/", env!("CARGO_PKG_VERSION"));

/// Alpha Vantage query endpoint; `function`, `tickers` and `apikey` are appended.
pub(crate) const DEFAULT_BASE_QUERY: &str = "https://www.alphavantage.co/query";

/// The provider function name for the news-sentiment feed.
pub(crate) const NEWS_SENTIMENT_FUNCTION: &str = "NEWS_SENTIMENT";

/// Ticker shown in the settings form before the user edits it.
pub(crate) const DEFAULT_TICKERS: &str = "AAPL";

/// How many articles the "Recent News" list shows.
pub(crate) const RECENT_ARTICLE_COUNT: usize = 10;

/// Listen address of the page server.
#[cfg_attr(not(feature = "server"), allow(dead_code))]
pub(crate) const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8501";
