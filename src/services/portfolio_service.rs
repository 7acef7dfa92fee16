use sqlx::PgPool;

use crate::db;
use crate::errors::AppError;
use crate::models::{parse_tickers, Portfolio, PortfolioName};

/// Validates presence of both fields before anything touches the store.
pub async fn create(pool: &PgPool, name: String, raw_tickers: &str) -> Result<Portfolio, AppError> {
    let tickers = parse_tickers(raw_tickers);
    if name.trim().is_empty() || tickers.is_empty() {
        return Err(AppError::Validation("Name and tickers are required".into()));
    }
    let portfolio = db::portfolio_queries::insert(pool, Portfolio::new(name, tickers)).await?;
    Ok(portfolio)
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Portfolio>, AppError> {
    let portfolios = db::portfolio_queries::fetch_all(pool).await?;
    Ok(portfolios)
}

pub async fn list_names(pool: &PgPool) -> Result<Vec<PortfolioName>, AppError> {
    let names = db::portfolio_queries::list_names(pool).await?;
    Ok(names)
}

pub async fn fetch_one(pool: &PgPool, name: &str) -> Result<Portfolio, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Tickers are required".into()));
    }
    let portfolio = db::portfolio_queries::fetch_one(pool, name)
        .await?
        .ok_or_else(|| AppError::NotFound("Portfolio not found".to_string()))?;
    Ok(portfolio)
}

pub async fn delete(pool: &PgPool, name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    match db::portfolio_queries::delete_one(pool, name).await? {
        0 => Err(AppError::NotFound("Portfolio not found".to_string())),
        _ => Ok(()),
    }
}

pub async fn delete_all(pool: &PgPool) -> Result<u64, AppError> {
    let deleted = db::portfolio_queries::delete_all(pool).await?;
    Ok(deleted)
}
