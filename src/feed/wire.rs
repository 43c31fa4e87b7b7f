use serde::Deserialize;

use crate::feed::model::{FeedResponse, NewsItem};

#[derive(Deserialize)]
pub(crate) struct FeedEnvelope {
    #[serde(rename = "Error Message")]
    pub(crate) error_message: Option<String>,
    // Rate-limit and premium notices arrive under these keys instead of a feed.
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    #[serde(rename = "Information")]
    pub(crate) information: Option<String>,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    #[serde(rename = "Note")]
    pub(crate) note: Option<String>,
    pub(crate) feed: Option<Vec<WireItem>>,
}

#[derive(Deserialize)]
pub(crate) struct WireItem {
    pub(crate) time_published: String,
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) summary: String,
    pub(crate) overall_sentiment_score: RawScore,
    pub(crate) overall_sentiment_label: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) source: Option<String>,
}

/// The score is documented as a string but numbers are accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawScore {
    Text(String),
    Number(f64),
}

impl RawScore {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

impl From<WireItem> for NewsItem {
    fn from(w: WireItem) -> Self {
        Self {
            time_published: w.time_published,
            title: w.title,
            summary: w.summary,
            overall_sentiment_score: w.overall_sentiment_score.into_text(),
            overall_sentiment_label: w.overall_sentiment_label,
            url: w.url,
            source: w.source,
        }
    }
}

impl FeedEnvelope {
    /// `"Error Message"` wins over everything; without it, no `"feed"` means
    /// `MissingFeed` even when a notice is present. Notices only reach the log.
    pub(crate) fn into_response(self) -> FeedResponse {
        if let Some(msg) = self.error_message {
            return FeedResponse::UpstreamError(msg);
        }
        if let Some(items) = self.feed {
            return FeedResponse::Feed(items.into_iter().map(NewsItem::from).collect());
        }
        #[cfg(feature = "tracing")]
        if let Some(notice) = self.information.as_deref().or(self.note.as_deref()) {
            tracing::warn!(notice, "provider notice in place of feed");
        }
        FeedResponse::MissingFeed
    }
}
