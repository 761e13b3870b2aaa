/// CRUD and field-default tests for both entities
pub mod crud_tests;


use sea_orm::DatabaseConnection;

/// Fresh single-connection in-memory database with the schema applied.
pub(crate) async fn setup_test_db() -> DatabaseConnection {
    let db = crate::db::connect_to("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    crate::schema::init(&db).await.expect("init schema");
    db
}
