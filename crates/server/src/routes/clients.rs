use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use models::{client, grant};

use crate::auth::ServerState;
use crate::errors::ApiError;

/// A client with its ordered grant list, as returned to admins.
#[derive(Debug, Serialize)]
pub struct ClientWithGrants {
    #[serde(flatten)]
    pub client: client::Model,
    pub grants: Vec<grant::Model>,
}

pub async fn list_clients(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ClientWithGrants>>, ApiError> {
    let clients = client::list_newest_first(&state.db).await?;
    let mut out = Vec::with_capacity(clients.len());
    for c in clients {
        let grants = grant::list_for_client(&state.db, c.id).await?;
        out.push(ClientWithGrants { client: c, grants });
    }
    Ok(Json(out))
}

pub async fn create_client(
    State(state): State<ServerState>,
    Json(input): Json<client::ClientInput>,
) -> Result<Json<Value>, ApiError> {
    let created = client::create(&state.db, input).await?;
    Ok(Json(json!({"id": created.id, "name": created.name})))
}

pub async fn update_client(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<client::ClientInput>,
) -> Result<Json<Value>, ApiError> {
    client::update(&state.db, id, input).await?;
    Ok(Json(json!({"ok": true})))
}

pub async fn delete_client(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    client::delete(&state.db, id).await?;
    Ok(Json(json!({"ok": true})))
}
