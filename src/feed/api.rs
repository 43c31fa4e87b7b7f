use url::Url;

use crate::{
    core::{NsClient, NsError, client::constants::NEWS_SENTIMENT_FUNCTION, net},
    feed::{
        FeedSort,
        model::{FeedResponse, NewsItem},
        wire,
    },
    input::RequestParams,
};

/// Decodes a response body into its tagged form.
///
/// # Errors
///
/// Returns `NsError::Json` if the body is not a JSON object of the expected shape.
pub fn decode_feed(body: &str) -> Result<FeedResponse, NsError> {
    let envelope: wire::FeedEnvelope = serde_json::from_str(body)?;
    Ok(envelope.into_response())
}

/// Renders a request URL with the `apikey` value masked.
pub(crate) fn redacted_url(url: &Url) -> String {
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out.to_string()
}

pub(super) async fn fetch_feed(
    client: &NsClient,
    params: &RequestParams,
    limit: Option<u32>,
    sort: Option<FeedSort>,
) -> Result<Vec<NewsItem>, NsError> {
    if params.api_key.is_empty() {
        return Err(NsError::MissingApiKey);
    }

    let mut url = client.base_query().clone();
    {
        let mut q = url.query_pairs_mut();
        q.append_pair("function", NEWS_SENTIMENT_FUNCTION)
            .append_pair("tickers", &params.tickers)
            .append_pair("apikey", params.api_key.expose());
        if let Some(limit) = limit {
            q.append_pair("limit", &limit.to_string());
        }
        if let Some(sort) = sort {
            q.append_pair("sort", sort.as_str());
        }
    }

    let resp = client
        .http()
        .get(url.clone())
        .send()
        .await
        .map_err(|e| NsError::Http(e.without_url()))?;

    if !resp.status().is_success() {
        return Err(NsError::Status {
            status: resp.status().as_u16(),
            url: redacted_url(&url),
        });
    }

    let body = net::get_text(resp, "news_sentiment", &params.tickers, "json")
        .await
        .map_err(|e| NsError::Http(e.without_url()))?;

    match decode_feed(&body)? {
        FeedResponse::UpstreamError(msg) => Err(NsError::Upstream(msg)),
        FeedResponse::MissingFeed => Err(NsError::NoData),
        FeedResponse::Feed(items) => Ok(items),
    }
}
