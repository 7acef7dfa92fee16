use axum::extract::State;
use axum::response::Html;
use axum::routing::post;
use axum::{Form, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{ProcessPortfolioForm, RemovePortfolioForm};
use crate::services;
use crate::state::AppState;
use crate::views;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/processPortfolio", post(process_portfolio))
        .route("/removePortfolio", post(remove_portfolio))
        .route("/removeAllPortfolios", post(remove_all_portfolios))
}

// Validation happens before the insert, and the insert before the quote
// fetch, so rejected input never reaches the store or the provider.
#[axum::debug_handler]
pub async fn process_portfolio(
    State(state): State<AppState>,
    Form(input): Form<ProcessPortfolioForm>,
) -> Result<Html<String>, AppError> {
    info!("POST /processPortfolio - Creating new portfolio");
    let name = input.name.unwrap_or_default();
    let raw_tickers = input.tickers.unwrap_or_default();

    let portfolio = services::portfolio_service::create(&state.pool, name, &raw_tickers)
        .await
        .map_err(|e| {
            error!("Failed to create portfolio: {}", e);
            e
        })?;

    let quotes = state
        .quote_provider
        .fetch_quotes(&portfolio.tickers)
        .await
        .map_err(|e| {
            error!(
                "Failed to fetch quotes for new portfolio {}: {}",
                portfolio.name, e
            );
            AppError::from(e)
        })?;

    let table = views::quote_table(&portfolio.tickers, &quotes);
    Ok(Html(views::process_result_page(
        &portfolio.name,
        &portfolio.tickers,
        &table,
    )))
}

pub async fn remove_portfolio(
    State(state): State<AppState>,
    Form(input): Form<RemovePortfolioForm>,
) -> Result<Html<String>, AppError> {
    let name = input.name.unwrap_or_default();
    info!("POST /removePortfolio - Removing portfolio {}", name);
    services::portfolio_service::delete(&state.pool, &name)
        .await
        .map_err(|e| {
            error!("Failed to remove portfolio {}: {}", name, e);
            e
        })?;
    Ok(Html(views::removed_page(&name)))
}

pub async fn remove_all_portfolios(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    info!("POST /removeAllPortfolios - Removing all portfolios");
    let deleted = services::portfolio_service::delete_all(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to remove all portfolios: {}", e);
            e
        })?;
    Ok(Html(views::removed_all_page(deleted)))
}
