use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").unwrap_or_else(|_| configs::DEFAULT_DATABASE_URL.to_string())
});

pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    connect_to(DATABASE_URL.as_str()).await
}

pub async fn connect_to(url: &str) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(url.to_string());
    opts.sqlx_logging(false);
    if url.starts_with("sqlite::memory:") {
        // A second pooled connection would open its own empty database.
        opts.max_connections(1);
    }
    let db = Database::connect(opts).await?;
    Ok(db)
}
