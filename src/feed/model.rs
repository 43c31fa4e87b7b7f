use serde::Serialize;

/// One article of the news-sentiment feed, as delivered by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// Publish time in the compact `YYYYMMDDTHHMMSS` form.
    pub time_published: String,
    /// The headline of the article.
    pub title: String,
    /// The provider's summary of the article.
    pub summary: String,
    /// String-encoded overall sentiment score, roughly in `[-1, 1]`.
    pub overall_sentiment_score: String,
    /// The provider's own label for the score. Kept for reference only.
    pub overall_sentiment_label: Option<String>,
    /// A direct link to the article.
    pub url: Option<String>,
    /// The publisher (e.g., "Reuters", "Benzinga").
    pub source: Option<String>,
}

/// A decoded response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedResponse {
    /// The provider returned an error or notice text instead of data.
    UpstreamError(String),
    /// The body carried neither an error nor a `"feed"` field.
    MissingFeed,
    /// The feed items, in provider order.
    Feed(Vec<NewsItem>),
}
