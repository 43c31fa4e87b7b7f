//! Turns raw feed items into typed, labelled items.
//!
//! Scores are bucketed by [`BUCKETS`], an ordered table of
//! `(lower_exclusive, upper_inclusive, label)` rows. A boundary value belongs to
//! the row whose upper edge it equals, so `0.15` is `Neutral` and `0.35` is `Positive`.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

use crate::{NsError, feed::NewsItem};

/// Format of `time_published` in the feed, e.g. `20240315T142500`.
pub const TIME_PUBLISHED_FORMAT: &str = "%Y%m%dT%H%M%S";

/// One of the five fixed sentiment buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SentimentLabel {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

/// Bucket table, evaluated top to bottom.
pub const BUCKETS: [(f64, f64, SentimentLabel); 5] = [
    (f64::NEG_INFINITY, -0.35, SentimentLabel::VeryNegative),
    (-0.35, -0.15, SentimentLabel::Negative),
    (-0.15, 0.15, SentimentLabel::Neutral),
    (0.15, 0.35, SentimentLabel::Positive),
    (0.35, f64::INFINITY, SentimentLabel::VeryPositive),
];

impl SentimentLabel {
    /// The display name, e.g. `"Very Negative"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryNegative => "Very Negative",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
            Self::VeryPositive => "Very Positive",
        }
    }

    /// Buckets a score.
    pub fn classify(score: f64) -> Self {
        BUCKETS
            .iter()
            .find(|(lower, upper, _)| score > *lower && score <= *upper)
            .map(|(_, _, label)| *label)
            // only -inf sits at or below the first exclusive lower bound
            .unwrap_or(Self::VeryNegative)
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SentimentLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A feed item with its timestamp and score parsed and its label assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedItem {
    pub time_published: NaiveDateTime,
    /// Calendar date of `time_published`.
    pub date: NaiveDate,
    pub title: String,
    pub summary: String,
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
    pub url: Option<String>,
    pub source: Option<String>,
}

/// Parses a compact `YYYYMMDDTHHMMSS` timestamp.
///
/// # Errors
///
/// Returns `NsError::Data` if the string does not match the format.
pub fn parse_time_published(raw: &str) -> Result<NaiveDateTime, NsError> {
    NaiveDateTime::parse_from_str(raw.trim(), TIME_PUBLISHED_FORMAT)
        .map_err(|e| NsError::Data(format!("time_published {raw:?}: {e}")))
}

/// Parses a string-encoded score. Non-finite values are rejected.
///
/// # Errors
///
/// Returns `NsError::Data` if the string is not a finite float.
pub fn parse_score(raw: &str) -> Result<f64, NsError> {
    let score: f64 = raw
        .trim()
        .parse()
        .map_err(|e| NsError::Data(format!("overall_sentiment_score {raw:?}: {e}")))?;
    if !score.is_finite() {
        return Err(NsError::Data(format!(
            "overall_sentiment_score {raw:?} is not finite"
        )));
    }
    Ok(score)
}

impl TryFrom<NewsItem> for ClassifiedItem {
    type Error = NsError;

    fn try_from(item: NewsItem) -> Result<Self, Self::Error> {
        let time_published = parse_time_published(&item.time_published)?;
        let sentiment_score = parse_score(&item.overall_sentiment_score)?;
        Ok(Self {
            time_published,
            date: time_published.date(),
            title: item.title,
            summary: item.summary,
            sentiment_score,
            sentiment_label: SentimentLabel::classify(sentiment_score),
            url: item.url,
            source: item.source,
        })
    }
}

/// Classifies a whole feed, keeping its order. The first bad item fails the feed.
///
/// # Errors
///
/// Returns `NsError::Data` for the first item whose timestamp or score does not parse.
pub fn classify_feed(items: Vec<NewsItem>) -> Result<Vec<ClassifiedItem>, NsError> {
    items.into_iter().map(ClassifiedItem::try_from).collect()
}
