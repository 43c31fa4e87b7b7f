use news_sentiment::{ErrorKind, FeedBuilder, NsError, RequestParams, pipeline};

use crate::common::{client_for, feed_body, feed_item, mock_feed, setup_server};

#[tokio::test]
async fn empty_key_never_reaches_the_network() {
    let server = setup_server();
    let mock = mock_feed(
        &server,
        "AAPL",
        feed_body(vec![feed_item("20240101T000000", "0.1", "a")]),
    );

    let client = client_for(&server);
    let err = FeedBuilder::new(&client, &RequestParams::new("AAPL", ""))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, NsError::MissingApiKey));
    assert_eq!(err.kind(), ErrorKind::Precondition);
    assert_eq!(err.user_message(), "Please enter your Alpha Vantage API key.");
    mock.assert_calls(0);
}

#[tokio::test]
async fn blank_key_through_pipeline_issues_no_request() {
    let server = setup_server();
    let mock = mock_feed(&server, "AAPL", feed_body(vec![]));

    let client = client_for(&server);
    let err = pipeline::run(&client, &RequestParams::new("AAPL", "   "))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Precondition);
    mock.assert_calls(0);
}
