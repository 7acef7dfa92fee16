use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tracing::{error, info};

use crate::errors::AppError;
use crate::services;
use crate::state::AppState;
use crate::views;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/portfolios", get(list_portfolios))
        .route("/insertPortfolio", get(insert_form))
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    info!("GET / - Listing portfolio names");
    let names = services::portfolio_service::list_names(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to list portfolio names: {}", e);
            e
        })?;
    Ok(Html(views::home_page(&names)))
}

pub async fn list_portfolios(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    info!("GET /portfolios - Fetching all portfolios");
    let portfolios = services::portfolio_service::fetch_all(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch portfolios: {}", e);
            e
        })?;
    Ok(Html(views::portfolios_page(&portfolios)))
}

pub async fn insert_form() -> Html<String> {
    info!("GET /insertPortfolio - Rendering insert form");
    Html(views::insert_form_page())
}
