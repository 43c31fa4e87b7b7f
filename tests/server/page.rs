use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use news_sentiment::server::router;
use tower::ServiceExt;

use crate::common::{API_KEY, client_for, feed_body, feed_item, mock_feed, setup_server};

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn submit(tickers: &str, api_key: &str) -> Request<Body> {
    let form = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("tickers", tickers)
        .append_pair("api_key", api_key)
        .finish();
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap()
}

#[tokio::test]
async fn index_shows_settings_and_welcome() {
    let server = setup_server();
    let app = router(client_for(&server));

    let resp = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let page = body_text(resp).await;
    assert!(page.contains("Fetch Data"));
    assert!(page.contains(r#"value="AAPL""#));
    assert!(page.contains(r#"type="password""#));
    assert!(page.contains("class=\"banner info\""));
}

#[tokio::test]
async fn missing_key_shows_error_without_request() {
    let server = setup_server();
    let mock = mock_feed(&server, "AAPL", feed_body(vec![]));
    let app = router(client_for(&server));

    let resp = app.oneshot(submit("AAPL", "")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page = body_text(resp).await;

    assert!(page.contains("Please enter your Alpha Vantage API key."));
    mock.assert_calls(0);
}

#[tokio::test]
async fn upstream_error_shows_message_and_no_chart() {
    let server = setup_server();
    let _mock = mock_feed(
        &server,
        "AAPL",
        serde_json::json!({ "Error Message": "X" }).to_string(),
    );
    let app = router(client_for(&server));

    let page = body_text(app.oneshot(submit("AAPL", API_KEY)).await.unwrap()).await;

    assert!(page.contains("API Error: X"));
    assert!(!page.contains("sentiment-chart"));
}

#[tokio::test]
async fn missing_feed_shows_generic_message() {
    let server = setup_server();
    let _mock = mock_feed(&server, "AAPL", "{}".to_string());
    let app = router(client_for(&server));

    let page = body_text(app.oneshot(submit("AAPL", API_KEY)).await.unwrap()).await;

    assert!(page.contains("No data available. Please check your API key and ticker symbols."));
    assert!(!page.contains("sentiment-chart"));
}

#[tokio::test]
async fn successful_fetch_renders_chart_and_hides_key() {
    let server = setup_server();
    let mock = mock_feed(
        &server,
        "AAPL,MSFT",
        feed_body(vec![
            feed_item("20240301T120000", "0.5", "Upbeat"),
            feed_item("20240302T120000", "-0.5", "Downbeat"),
        ]),
    );
    let app = router(client_for(&server));

    let page = body_text(app.oneshot(submit("AAPL,MSFT", API_KEY)).await.unwrap()).await;
    mock.assert();

    assert!(page.contains("Stock News Sentiment Analysis"));
    assert!(page.contains("sentiment-chart"));
    assert!(page.contains(r#""name":"Very Positive""#));
    assert!(page.contains(r#""name":"Very Negative""#));
    assert!(page.contains("Recent News"));
    // newest first
    let down = page.find("<h3><a href=\"https://news.example.com/Downbeat\">").unwrap();
    let up = page.find("<h3><a href=\"https://news.example.com/Upbeat\">").unwrap();
    assert!(down < up);
    // the ticker field keeps what was typed; the key is gone
    assert!(page.contains(r#"value="AAPL,MSFT""#));
    assert!(!page.contains(API_KEY));
}
