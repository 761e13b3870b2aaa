//! Idempotent startup schema.
//!
//! Tables are derived from the entities and created only when absent; a
//! pre-existing incompatible schema is not reconciled.

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::{client, errors::ModelError, grant};

pub async fn init(db: &DatabaseConnection) -> Result<(), ModelError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut clients = schema.create_table_from_entity(client::Entity);
    db.execute(backend.build(clients.if_not_exists())).await?;

    let mut grants = schema.create_table_from_entity(grant::Entity);
    db.execute(backend.build(grants.if_not_exists())).await?;

    Ok(())
}
