//! Exercises the RapidAPI quote client against a local mock server: request
//! shape (query + auth headers), payload parsing, and failure mapping.

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stockfolio::external::quote_provider::{QuoteProvider, QuoteProviderError};
use stockfolio::external::rapidapi_yahoo::RapidApiYahooProvider;

fn provider_for(server: &MockServer) -> RapidApiYahooProvider {
    RapidApiYahooProvider::new(
        "test-key".to_string(),
        "yahoo-finance15.p.rapidapi.com".to_string(),
        server.uri(),
    )
}

fn tickers(symbols: &[&str]) -> Vec<String> {
    symbols.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn sends_joined_tickers_and_auth_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/markets/stock/quotes"))
        .and(query_param("ticker", "AAPL,MSFT"))
        .and(header("x-rapidapi-key", "test-key"))
        .and(header("x-rapidapi-host", "yahoo-finance15.p.rapidapi.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "body": [
                { "symbol": "AAPL", "shortName": "Apple Inc.", "regularMarketPrice": 189.95 },
                { "symbol": "MSFT", "shortName": "Microsoft Corporation" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let quotes = provider_for(&server)
        .fetch_quotes(&tickers(&["AAPL", "MSFT"]))
        .await
        .unwrap();

    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].symbol, "AAPL");
    assert_eq!(quotes[0].short_name.as_deref(), Some("Apple Inc."));
    assert_eq!(quotes[0].price, Some(189.95));
    assert_eq!(quotes[1].price, None);
}

#[tokio::test]
async fn treats_missing_body_as_no_quotes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/markets/stock/quotes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let quotes = provider_for(&server)
        .fetch_quotes(&tickers(&["AAA", "BBB"]))
        .await
        .unwrap();

    assert!(quotes.is_empty());
}

#[tokio::test]
async fn treats_empty_body_as_no_quotes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/markets/stock/quotes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "body": [] })))
        .mount(&server)
        .await;

    let quotes = provider_for(&server)
        .fetch_quotes(&tickers(&["AAA"]))
        .await
        .unwrap();

    assert!(quotes.is_empty());
}

#[tokio::test]
async fn maps_http_failure_to_bad_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/markets/stock/quotes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .fetch_quotes(&tickers(&["AAPL"]))
        .await
        .unwrap_err();

    assert!(matches!(err, QuoteProviderError::BadResponse(_)));
}

#[tokio::test]
async fn maps_malformed_payload_to_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/markets/stock/quotes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .fetch_quotes(&tickers(&["AAPL"]))
        .await
        .unwrap_err();

    assert!(matches!(err, QuoteProviderError::Parse(_)));
}
