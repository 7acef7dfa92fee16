use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use stockfolio::app;
use stockfolio::db;
use stockfolio::external::rapidapi_yahoo::RapidApiYahooProvider;
use stockfolio::logging::{init_logging, LoggingConfig};
use stockfolio::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env());

    let database_url = std::env::var("DATABASE_URL")?;
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await?;

    db::init::ensure_schema(&pool).await?;

    let provider = RapidApiYahooProvider::from_env()
        .map_err(|e| anyhow::anyhow!("failed to create quote provider (check RAPIDAPI_KEY): {e}"))?;

    let state = AppState {
        pool,
        quote_provider: Arc::new(provider),
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Stock portfolio manager listening at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
