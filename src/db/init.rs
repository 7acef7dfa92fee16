use sqlx::PgPool;

// Schema bootstrap, not a migration system: the schema is one table.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS portfolios (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            tickers TEXT[] NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
