use async_trait::async_trait;
use serde::Deserialize;

use crate::external::quote_provider::{QuoteProvider, QuoteProviderError, StockQuote};

const DEFAULT_HOST: &str = "yahoo-finance15.p.rapidapi.com";

/// Yahoo Finance quotes via RapidAPI. One batched request per ticker list,
/// authenticated with the `x-rapidapi-key` / `x-rapidapi-host` header pair.
pub struct RapidApiYahooProvider {
    client: reqwest::Client,
    api_key: String,
    host: String,
    base_url: String,
}

impl RapidApiYahooProvider {
    pub fn from_env() -> Result<Self, QuoteProviderError> {
        let api_key = std::env::var("RAPIDAPI_KEY")
            .map_err(|_| QuoteProviderError::BadResponse("RAPIDAPI_KEY not set".into()))?;
        let host = std::env::var("RAPIDAPI_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let base_url = format!("https://{}", host);
        Ok(Self::new(api_key, host, base_url))
    }

    // base_url is separate from host so tests can point at a local server
    // while still sending the real host header.
    pub fn new(api_key: String, host: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            host,
            base_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct QuotesResponse {
    body: Option<Vec<QuoteEntry>>,
}

#[derive(Debug, Deserialize)]
struct QuoteEntry {
    symbol: String,
    #[serde(rename = "shortName")]
    short_name: Option<String>,
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

#[async_trait]
impl QuoteProvider for RapidApiYahooProvider {
    async fn fetch_quotes(
        &self,
        tickers: &[String],
    ) -> Result<Vec<StockQuote>, QuoteProviderError> {
        let url = format!("{}/api/v1/markets/stock/quotes", self.base_url);

        let resp = self
            .client
            .get(&url)
            .query(&[("ticker", tickers.join(","))])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.host)
            .send()
            .await
            .map_err(|e| QuoteProviderError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(QuoteProviderError::BadResponse(format!(
                "HTTP {}",
                resp.status()
            )));
        }

        let body: QuotesResponse = resp
            .json()
            .await
            .map_err(|e| QuoteProviderError::Parse(e.to_string()))?;

        // An absent or empty body means "no quotes", not a failure.
        let quotes = body
            .body
            .unwrap_or_default()
            .into_iter()
            .map(|entry| StockQuote {
                symbol: entry.symbol,
                short_name: entry.short_name,
                price: entry.regular_market_price,
            })
            .collect();

        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_quote_entries() {
        let payload = r#"{
            "body": [
                { "symbol": "AAPL", "shortName": "Apple Inc.", "regularMarketPrice": 189.95 },
                { "symbol": "MSFT", "shortName": "Microsoft Corporation" }
            ]
        }"#;
        let parsed: QuotesResponse = serde_json::from_str(payload).unwrap();
        let entries = parsed.body.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].symbol, "AAPL");
        assert_eq!(entries[0].regular_market_price, Some(189.95));
        assert_eq!(entries[1].regular_market_price, None);
    }

    #[test]
    fn deserializes_missing_body_as_none() {
        let parsed: QuotesResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.body.is_none());
    }

    #[test]
    fn ignores_extra_provider_fields() {
        let payload = r#"{
            "meta": { "version": "v1.0", "status": 200 },
            "body": [
                { "symbol": "AAPL", "shortName": "Apple Inc.",
                  "regularMarketPrice": 189.95, "regularMarketVolume": 51234567 }
            ]
        }"#;
        let parsed: QuotesResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.body.unwrap().len(), 1);
    }
}
