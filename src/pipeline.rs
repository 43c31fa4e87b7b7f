//! One invocation: fetch → classify → chart + article list.
//!
//! Nothing is kept between calls; every `run` starts from its own parameters.

use serde::Serialize;

use crate::{
    NsClient, NsError,
    articles::{ArticleEntry, recent_articles},
    chart::Chart,
    classify::{ClassifiedItem, classify_feed},
    core::client::constants::RECENT_ARTICLE_COUNT,
    feed::FeedBuilder,
    input::RequestParams,
};

/// Everything the page needs after a successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// The ticker list as the user typed it.
    pub tickers: String,
    pub items: Vec<ClassifiedItem>,
    pub chart: Chart,
    /// The most recent articles, newest first.
    pub articles: Vec<ArticleEntry>,
}

impl Report {
    /// Builds the chart and article list from an already classified feed.
    pub fn from_items(tickers: impl Into<String>, items: Vec<ClassifiedItem>) -> Self {
        let chart = Chart::from_items(&items);
        let articles = recent_articles(&items, RECENT_ARTICLE_COUNT);
        Self {
            tickers: tickers.into(),
            items,
            chart,
            articles,
        }
    }
}

/// Runs the full pipeline for one user action.
///
/// # Errors
///
/// Any [`NsError`]; use [`NsError::kind`] and [`NsError::user_message`] to report it.
/// An empty API key fails before any request is made.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(client, params), fields(tickers = %params.tickers))
)]
pub async fn run(client: &NsClient, params: &RequestParams) -> Result<Report, NsError> {
    let result = fetch_and_build(client, params).await;

    #[cfg(feature = "tracing")]
    match &result {
        Ok(report) => tracing::info!(
            items = report.items.len(),
            series = report.chart.series.len(),
            "news sentiment rendered"
        ),
        Err(e) => tracing::warn!(kind = ?e.kind(), error = %e, "news sentiment fetch failed"),
    }

    result
}

async fn fetch_and_build(client: &NsClient, params: &RequestParams) -> Result<Report, NsError> {
    let raw = FeedBuilder::new(client, params).fetch().await?;
    let items = classify_feed(raw)?;
    Ok(Report::from_items(params.tickers.clone(), items))
}
