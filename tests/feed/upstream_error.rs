use news_sentiment::{ErrorKind, FeedBuilder, NsError, RequestParams};

use crate::common::{API_KEY, client_for, mock_feed, setup_server};

#[tokio::test]
async fn error_message_is_passed_through_verbatim() {
    let server = setup_server();
    let text = "Invalid API call. Please retry or visit the documentation for NEWS_SENTIMENT.";
    let mock = mock_feed(
        &server,
        "NOPE",
        serde_json::json!({ "Error Message": text }).to_string(),
    );

    let client = client_for(&server);
    let err = FeedBuilder::new(&client, &RequestParams::new("NOPE", API_KEY))
        .fetch()
        .await
        .unwrap_err();
    mock.assert();

    match &err {
        NsError::Upstream(msg) => assert_eq!(msg, text),
        other => panic!("expected Upstream error, got {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert!(err.user_message().contains(text));
}

#[tokio::test]
async fn body_without_feed_is_no_data() {
    let server = setup_server();
    let mock = mock_feed(&server, "AAPL", r#"{"items": "0"}"#.to_string());

    let client = client_for(&server);
    let err = FeedBuilder::new(&client, &RequestParams::new("AAPL", API_KEY))
        .fetch()
        .await
        .unwrap_err();
    mock.assert();

    assert!(matches!(err, NsError::NoData));
    assert_eq!(err.kind(), ErrorKind::Shape);
    assert_eq!(
        err.user_message(),
        "No data available. Please check your API key and ticker symbols."
    );
}

#[tokio::test]
async fn rate_limit_notice_shows_generic_no_data() {
    let server = setup_server();
    let notice = "Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day.";
    let _mock = mock_feed(
        &server,
        "AAPL",
        serde_json::json!({ "Information": notice }).to_string(),
    );

    let client = client_for(&server);
    let err = FeedBuilder::new(&client, &RequestParams::new("AAPL", API_KEY))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, NsError::NoData));
    assert_eq!(err.kind(), ErrorKind::Shape);
    assert_eq!(
        err.user_message(),
        "No data available. Please check your API key and ticker symbols."
    );
}
