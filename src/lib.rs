//! news-sentiment: Alpha Vantage news-sentiment feed, bucketed and charted.
//!
//! One invocation fetches the `NEWS_SENTIMENT` feed for a ticker list, labels
//! every article by its overall score, and produces a scatter chart plus the
//! ten most recent articles. See [`pipeline::run`].
//!
//! ```no_run
//! # async fn demo() -> Result<(), news_sentiment::NsError> {
//! use news_sentiment::{NsClient, RequestParams, pipeline};
//!
//! let client = NsClient::new()?;
//! let report = pipeline::run(&client, &RequestParams::new("AAPL,MSFT", "my-key")).await?;
//! for article in &report.articles {
//!     println!("{} [{}]", article.title, article.sentiment);
//! }
//! # Ok(())
//! # }
//! ```

pub mod articles;
pub mod chart;
pub mod classify;
pub mod core;
pub mod feed;
pub mod input;
pub mod page;
pub mod pipeline;
#[cfg(feature = "server")]
pub mod server;

pub use articles::{ArticleEntry, recent_articles};
pub use chart::{Chart, Point, Series};
pub use classify::{ClassifiedItem, SentimentLabel, classify_feed};
pub use crate::core::{ErrorKind, NsClient, NsClientBuilder, NsError};
pub use feed::{FeedBuilder, FeedResponse, FeedSort, NewsItem, decode_feed};
pub use input::{ApiKey, RequestParams};
pub use pipeline::Report;
