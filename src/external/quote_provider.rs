use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuote {
    pub symbol: String,
    pub short_name: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Error)]
pub enum QuoteProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetches the latest quote for each ticker in one provider round trip.
    /// A ticker the provider does not know simply has no entry in the result.
    async fn fetch_quotes(&self, tickers: &[String])
        -> Result<Vec<StockQuote>, QuoteProviderError>;
}
