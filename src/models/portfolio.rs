use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// A named basket of ticker symbols. Names are the user-facing key and are
// deliberately not unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Portfolio {
    pub id: uuid::Uuid,
    pub name: String,
    pub tickers: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Portfolio {
    pub fn new(name: String, tickers: Vec<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name,
            tickers,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Name-only projection for the home page listing.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct PortfolioName {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ProcessPortfolioForm {
    pub name: Option<String>,
    pub tickers: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RemovePortfolioForm {
    pub name: Option<String>,
}

// The field is called `names` but holds a single portfolio name.
#[derive(Debug, Deserialize)]
pub struct GetPricesForm {
    pub names: Option<String>,
}

/// Splits a raw comma-separated ticker string into trimmed symbols,
/// dropping empty fragments.
pub fn parse_tickers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|ticker| ticker.trim().to_string())
        .filter(|ticker| !ticker.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tickers_trims_whitespace() {
        assert_eq!(parse_tickers("AAPL, MSFT , GOOG"), vec!["AAPL", "MSFT", "GOOG"]);
    }

    #[test]
    fn parse_tickers_drops_empty_fragments() {
        assert_eq!(parse_tickers("AAPL,,MSFT,"), vec!["AAPL", "MSFT"]);
        assert!(parse_tickers("").is_empty());
        assert!(parse_tickers(" , ,").is_empty());
    }

    #[test]
    fn parse_tickers_keeps_input_order() {
        assert_eq!(parse_tickers("ZZZ,AAA"), vec!["ZZZ", "AAA"]);
    }
}
