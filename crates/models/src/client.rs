use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::ModelError, fields, grant};

/// Fixed organization label shown on the client-facing view when no
/// presenter is supplied.
pub const DEFAULT_PRESENTER: &str = "Ascend Grant Partners";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    pub sector: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub presenter: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Grant,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Grant => Entity::has_many(grant::Entity).into(),
        }
    }
}

impl Related<grant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Statically declared set of client fields accepted from request bodies.
/// Anything else in the payload is dropped during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientInput {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub sector: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub presenter: Option<String>,
}

pub async fn create(db: &DatabaseConnection, input: ClientInput) -> Result<Model, ModelError> {
    let name = input.name.unwrap_or_default();
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        contact: Set(fields::or_empty(input.contact)),
        sector: Set(fields::or_empty(input.sector)),
        email: Set(fields::or_empty(input.email)),
        phone: Set(fields::or_empty(input.phone)),
        message: Set(fields::or_empty(input.message)),
        presenter: Set(fields::or_label(input.presenter, DEFAULT_PRESENTER)),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// Full overwrite of the mutable fields, refreshing `updated_at`.
/// An unknown id is a successful no-op.
pub async fn update(db: &DatabaseConnection, id: Uuid, input: ClientInput) -> Result<(), ModelError> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(());
    };
    let mut am: ActiveModel = existing.into();
    am.name = Set(fields::or_empty(input.name));
    am.contact = Set(fields::or_empty(input.contact));
    am.sector = Set(fields::or_empty(input.sector));
    am.email = Set(fields::or_empty(input.email));
    am.phone = Set(fields::or_empty(input.phone));
    am.message = Set(fields::or_empty(input.message));
    am.presenter = Set(fields::or_label(input.presenter, DEFAULT_PRESENTER));
    am.updated_at = Set(Utc::now().into());
    am.update(db).await?;
    Ok(())
}

/// Removes the client and everything it owns in one transaction.
/// An unknown id is a successful no-op.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ModelError> {
    let txn = db.begin().await?;
    grant::Entity::delete_many()
        .filter(grant::Column::ClientId.eq(id))
        .exec(&txn)
        .await?;
    Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    Ok(())
}

pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn list_newest_first(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?)
}
