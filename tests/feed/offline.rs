use httpmock::Method::GET;
use news_sentiment::{FeedBuilder, FeedSort, RequestParams};

use crate::common::{API_KEY, client_for, fixture, mock_feed, setup_server};

#[tokio::test]
async fn offline_feed_uses_recorded_fixture() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "NEWS_SENTIMENT")
            .query_param("tickers", "AAPL")
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_sentiment", "AAPL", "json"));
    });

    let client = client_for(&server);
    let items = FeedBuilder::new(&client, &RequestParams::new("AAPL", API_KEY))
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(items.len(), 4);

    // provider order is kept as-is
    let first = &items[0];
    assert_eq!(first.title, "Apple Unveils New Vision Pro Features Ahead Of WWDC");
    assert_eq!(first.time_published, "20240607T141500");
    assert_eq!(first.overall_sentiment_score, "0.412357");
    assert_eq!(first.source.as_deref(), Some("Benzinga"));
    assert_eq!(items[2].overall_sentiment_score, "-0.361");
}

#[tokio::test]
async fn ticker_list_is_sent_verbatim() {
    let server = setup_server();
    let mock = mock_feed(&server, "AAPL,MSFT", r#"{"feed": []}"#.to_string());

    let client = client_for(&server);
    let items = FeedBuilder::new(&client, &RequestParams::new("AAPL,MSFT", API_KEY))
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(items.is_empty());
}

#[tokio::test]
async fn builder_adds_limit_and_sort() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "NEWS_SENTIMENT")
            .query_param("limit", "50")
            .query_param("sort", "LATEST");
        then.status(200).body(r#"{"feed": []}"#);
    });

    let client = client_for(&server);
    FeedBuilder::new(&client, &RequestParams::new("AAPL", API_KEY))
        .limit(50)
        .sort(FeedSort::Latest)
        .fetch()
        .await
        .unwrap();

    mock.assert();
}
