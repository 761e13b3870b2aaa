use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::auth::ServerState;
use crate::routes;

fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // config.toml merged with env, normalized and validated
    let cfg = configs::AppConfig::load_or_default()?;

    common::env::ensure_env("frontend", "data").await?;

    // Store handle and idempotent schema bootstrap
    let db = models::db::connect().await?;
    models::schema::init(&db).await?;

    let admin_token = cfg.admin.token;
    if admin_token == configs::DEFAULT_ADMIN_TOKEN {
        warn!("admin token is the built-in default; set ADMIN_TOKEN in any real deployment");
    }

    let state = ServerState { db, admin_token };

    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting grantdesk server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
