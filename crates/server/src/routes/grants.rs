use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use models::grant;

use crate::auth::ServerState;
use crate::errors::ApiError;

#[derive(Debug, Deserialize)]
pub struct ReplaceGrantsInput {
    pub grants: Vec<grant::GrantInput>,
}

pub async fn create_grant(
    State(state): State<ServerState>,
    Path(client_id): Path<Uuid>,
    Json(input): Json<grant::GrantInput>,
) -> Result<Json<Value>, ApiError> {
    let created = grant::create(&state.db, client_id, input).await?;
    Ok(Json(json!({"id": created.id})))
}

pub async fn update_grant(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<grant::GrantInput>,
) -> Result<Json<Value>, ApiError> {
    grant::update(&state.db, id, input).await?;
    Ok(Json(json!({"ok": true})))
}

pub async fn delete_grant(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    grant::delete(&state.db, id).await?;
    Ok(Json(json!({"ok": true})))
}

/// Swaps a client's whole grant list for the submitted one; positions in
/// the list become sort_order.
pub async fn replace_grants(
    State(state): State<ServerState>,
    Path(client_id): Path<Uuid>,
    Json(input): Json<ReplaceGrantsInput>,
) -> Result<Json<Value>, ApiError> {
    grant::replace_for_client(&state.db, client_id, input.grants).await?;
    Ok(Json(json!({"ok": true})))
}
