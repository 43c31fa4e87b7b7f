use news_sentiment::{ErrorKind, NsError, RequestParams, pipeline};

use crate::common::{API_KEY, client_for, feed_body, feed_item, mock_feed, setup_server};

#[tokio::test]
async fn unparseable_score_is_a_transient_failure() {
    let server = setup_server();
    let _mock = mock_feed(
        &server,
        "AAPL",
        feed_body(vec![
            feed_item("20240101T000000", "0.3", "fine"),
            feed_item("20240102T000000", "n/a", "broken"),
        ]),
    );

    let client = client_for(&server);
    let err = pipeline::run(&client, &RequestParams::new("AAPL", API_KEY))
        .await
        .unwrap_err();

    assert!(matches!(err, NsError::Data(_)));
    assert_eq!(err.kind(), ErrorKind::Transient);
    assert!(
        err.user_message()
            .starts_with("Failed to fetch news sentiment data:")
    );
}

#[tokio::test]
async fn unparseable_timestamp_is_a_transient_failure() {
    let server = setup_server();
    let _mock = mock_feed(
        &server,
        "AAPL",
        feed_body(vec![feed_item("2024-01-01T00:00:00Z", "0.3", "iso")]),
    );

    let client = client_for(&server);
    let err = pipeline::run(&client, &RequestParams::new("AAPL", API_KEY))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transient);
}

#[tokio::test]
async fn upstream_error_produces_no_report() {
    let server = setup_server();
    let _mock = mock_feed(
        &server,
        "AAPL",
        serde_json::json!({ "Error Message": "X" }).to_string(),
    );

    let client = client_for(&server);
    let result = pipeline::run(&client, &RequestParams::new("AAPL", API_KEY)).await;

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert!(err.user_message().contains('X'));
}
