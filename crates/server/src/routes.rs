use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::auth::{self, ServerState};

pub mod clients;
pub mod grants;
pub mod public;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: landing/view pages, the one
/// unauthenticated client read, and the token-protected admin API.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    let public = Router::new()
        .route("/health", get(health))
        .route("/api/client/:id", get(public::get_client))
        .route_service("/client/:id", ServeFile::new("frontend/client.html"));

    let admin_api = Router::new()
        .route(
            "/api/clients",
            get(clients::list_clients).post(clients::create_client),
        )
        .route(
            "/api/clients/:id",
            put(clients::update_client).delete(clients::delete_client),
        )
        .route(
            "/api/clients/:client_id/grants",
            post(grants::create_grant).put(grants::replace_grants),
        )
        .route(
            "/api/grants/:id",
            put(grants::update_grant).delete(grants::delete_grant),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin_token,
        ));

    public
        .merge(admin_api)
        // Everything else falls through to the landing page assets
        .fallback_service(static_dir)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
