//! The "Recent News" list: newest articles first.

use serde::Serialize;

use crate::classify::{ClassifiedItem, SentimentLabel};

/// Timestamp format shown next to "Published:".
pub const PUBLISHED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One rendered entry of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleEntry {
    pub title: String,
    /// Publish time formatted with [`PUBLISHED_FORMAT`].
    pub published: String,
    pub sentiment: SentimentLabel,
    pub summary: String,
    pub url: Option<String>,
    pub source: Option<String>,
}

impl From<&ClassifiedItem> for ArticleEntry {
    fn from(item: &ClassifiedItem) -> Self {
        Self {
            title: item.title.clone(),
            published: item.time_published.format(PUBLISHED_FORMAT).to_string(),
            sentiment: item.sentiment_label,
            summary: item.summary.clone(),
            url: item.url.clone(),
            source: item.source.clone(),
        }
    }
}

/// The `limit` most recent items, newest first. Items with equal timestamps
/// keep their feed order.
pub fn recent_articles(items: &[ClassifiedItem], limit: usize) -> Vec<ArticleEntry> {
    let mut sorted: Vec<&ClassifiedItem> = items.iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| b.time_published.cmp(&a.time_published));
    sorted.into_iter().take(limit).map(ArticleEntry::from).collect()
}
