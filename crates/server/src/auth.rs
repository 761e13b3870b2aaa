use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;

use crate::errors::ApiError;

/// Header carrying the shared admin credential.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub admin_token: String,
}

/// Middleware: protected routes require the exact admin token before any
/// store access happens. Plain equality; a constant-time comparison would
/// be the next hardening step for this single static credential.
pub async fn require_admin_token(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Response {
    let supplied = req
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());

    match supplied {
        Some(token) if token == state.admin_token => next.run(req).await,
        _ => ApiError::Unauthorized.into_response(),
    }
}
