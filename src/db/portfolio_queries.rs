use sqlx::PgPool;

use crate::models::{Portfolio, PortfolioName};

pub async fn insert(pool: &PgPool, input: Portfolio) -> Result<Portfolio, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "INSERT INTO portfolios (id, name, tickers, created_at)
         VALUES ($1, $2, $3, $4)
         RETURNING id, name, tickers, created_at",
    )
    .bind(input.id)
    .bind(input.name)
    .bind(input.tickers)
    .bind(input.created_at)
    .fetch_one(pool)
    .await
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "SELECT id, name, tickers, created_at
         FROM portfolios
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, name: &str) -> Result<Option<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "SELECT id, name, tickers, created_at
         FROM portfolios
         WHERE name = $1
         LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await
}

pub async fn list_names(pool: &PgPool) -> Result<Vec<PortfolioName>, sqlx::Error> {
    sqlx::query_as::<_, PortfolioName>("SELECT name FROM portfolios ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

// Names are not unique, so deletion is pinned to a single row.
pub async fn delete_one(pool: &PgPool, name: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM portfolios
         WHERE id = (SELECT id FROM portfolios WHERE name = $1 LIMIT 1)",
    )
    .bind(name)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM portfolios").execute(pool).await?;
    Ok(result.rows_affected())
}
