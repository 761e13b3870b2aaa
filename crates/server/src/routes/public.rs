use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use models::{client, grant};

use crate::auth::ServerState;
use crate::errors::ApiError;

/// Grant as exposed on the client-facing view: the stored grant minus the
/// internal notes.
#[derive(Debug, Serialize)]
pub struct PublicGrant {
    pub id: Uuid,
    pub client_id: Uuid,
    pub name: String,
    pub funder: String,
    pub category: String,
    pub amount: String,
    pub cover: String,
    pub deadline: String,
    pub status: String,
    pub match_pct: i32,
    pub sort_order: i32,
}

impl From<grant::Model> for PublicGrant {
    fn from(g: grant::Model) -> Self {
        Self {
            id: g.id,
            client_id: g.client_id,
            name: g.name,
            funder: g.funder,
            category: g.category,
            amount: g.amount,
            cover: g.cover,
            deadline: g.deadline,
            status: g.status,
            match_pct: g.match_pct,
            sort_order: g.sort_order,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PublicClient {
    #[serde(flatten)]
    pub client: client::Model,
    pub grants: Vec<PublicGrant>,
}

/// Unauthenticated single-client read; notes never leave this handler.
pub async fn get_client(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PublicClient>, ApiError> {
    let Some(found) = client::find(&state.db, id).await? else {
        return Err(ApiError::NotFound);
    };
    let grants = grant::list_for_client(&state.db, id)
        .await?
        .into_iter()
        .map(PublicGrant::from)
        .collect();
    Ok(Json(PublicClient { client: found, grants }))
}
