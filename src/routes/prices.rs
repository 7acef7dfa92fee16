use axum::extract::State;
use axum::response::Html;
use axum::routing::post;
use axum::{Form, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::GetPricesForm;
use crate::services;
use crate::state::AppState;
use crate::views;

pub fn router() -> Router<AppState> {
    Router::new().route("/getPrices", post(get_prices))
}

pub async fn get_prices(
    State(state): State<AppState>,
    Form(input): Form<GetPricesForm>,
) -> Result<Html<String>, AppError> {
    let name = input.names.unwrap_or_default();
    info!("POST /getPrices - Fetching quotes for portfolio {}", name);

    let portfolio = services::portfolio_service::fetch_one(&state.pool, &name)
        .await
        .map_err(|e| {
            error!("Failed to look up portfolio {}: {}", name, e);
            e
        })?;

    let quotes = state
        .quote_provider
        .fetch_quotes(&portfolio.tickers)
        .await
        .map_err(|e| {
            error!("Failed to fetch quotes for {}: {}", portfolio.name, e);
            AppError::from(e)
        })?;

    let table = views::quote_table(&portfolio.tickers, &quotes);
    Ok(Html(views::prices_page(&portfolio.name, &table)))
}
