use chrono::Utc;
use sea_orm::sea_query::ForeignKeyAction;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{client, errors::ModelError, fields};

pub const DEFAULT_STATUS: &str = "open";
pub const DEFAULT_MATCH_PCT: i32 = 70;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "grant")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub client_id: Uuid,
    pub name: String,
    pub funder: String,
    pub category: String,
    /// Free text; may carry currency symbols or ranges.
    pub amount: String,
    pub cover: String,
    pub deadline: String,
    pub status: String,
    pub match_pct: i32,
    /// Admin-only. Stripped from the public client view.
    pub notes: String,
    pub sort_order: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Client,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Client => Entity::belongs_to(client::Entity)
                .from(Column::ClientId)
                .to(client::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Statically declared set of grant fields accepted from request bodies.
/// `sort_order` is deliberately absent: it is owned by the bulk replace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrantInput {
    pub name: Option<String>,
    pub funder: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
    pub cover: Option<String>,
    pub deadline: Option<String>,
    pub status: Option<String>,
    pub match_pct: Option<i32>,
    pub notes: Option<String>,
}

fn active_from_input(client_id: Uuid, sort_order: i32, input: GrantInput) -> ActiveModel {
    ActiveModel {
        id: Set(Uuid::new_v4()),
        client_id: Set(client_id),
        name: Set(fields::or_empty(input.name)),
        funder: Set(fields::or_empty(input.funder)),
        category: Set(fields::or_empty(input.category)),
        amount: Set(fields::or_empty(input.amount)),
        cover: Set(fields::or_empty(input.cover)),
        deadline: Set(fields::or_empty(input.deadline)),
        status: Set(fields::or_label(input.status, DEFAULT_STATUS)),
        match_pct: Set(fields::or_pct(input.match_pct, DEFAULT_MATCH_PCT)),
        notes: Set(fields::or_empty(input.notes)),
        sort_order: Set(sort_order),
        created_at: Set(Utc::now().into()),
    }
}

/// Appends a grant for the client with the default sort_order of 0.
pub async fn create(
    db: &DatabaseConnection,
    client_id: Uuid,
    input: GrantInput,
) -> Result<Model, ModelError> {
    Ok(active_from_input(client_id, 0, input).insert(db).await?)
}

/// Full overwrite of the mutable fields; `sort_order` keeps its value.
/// An unknown id is a successful no-op.
pub async fn update(db: &DatabaseConnection, id: Uuid, input: GrantInput) -> Result<(), ModelError> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(());
    };
    let mut am: ActiveModel = existing.into();
    am.name = Set(fields::or_empty(input.name));
    am.funder = Set(fields::or_empty(input.funder));
    am.category = Set(fields::or_empty(input.category));
    am.amount = Set(fields::or_empty(input.amount));
    am.cover = Set(fields::or_empty(input.cover));
    am.deadline = Set(fields::or_empty(input.deadline));
    am.status = Set(fields::or_label(input.status, DEFAULT_STATUS));
    am.match_pct = Set(fields::or_pct(input.match_pct, DEFAULT_MATCH_PCT));
    am.notes = Set(fields::or_empty(input.notes));
    am.update(db).await?;
    Ok(())
}

/// An unknown id is a successful no-op.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ModelError> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

/// Grants of one client in display order: sort_order ascending, creation
/// order breaking ties.
pub async fn list_for_client(
    db: &DatabaseConnection,
    client_id: Uuid,
) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::ClientId.eq(client_id))
        .order_by_asc(Column::SortOrder)
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await?)
}

/// Replaces the whole grant list of a client in one transaction. Every
/// submitted grant gets a fresh id and a sort_order equal to its 0-based
/// position; a failure mid-way leaves the previous list intact.
pub async fn replace_for_client(
    db: &DatabaseConnection,
    client_id: Uuid,
    inputs: Vec<GrantInput>,
) -> Result<(), ModelError> {
    let txn = db.begin().await?;
    Entity::delete_many()
        .filter(Column::ClientId.eq(client_id))
        .exec(&txn)
        .await?;
    for (pos, input) in inputs.into_iter().enumerate() {
        active_from_input(client_id, pos as i32, input)
            .insert(&txn)
            .await?;
    }
    txn.commit().await?;
    Ok(())
}
