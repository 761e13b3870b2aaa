use uuid::Uuid;

use crate::tests::setup_test_db;
use crate::{client, errors::ModelError, grant};

fn named_client(name: &str) -> client::ClientInput {
    client::ClientInput { name: Some(name.into()), ..Default::default() }
}

#[tokio::test]
async fn client_create_applies_defaults() {
    let db = setup_test_db().await;

    let created = client::create(&db, named_client("Acme")).await.expect("create");

    assert_eq!(created.name, "Acme");
    assert_eq!(created.contact, "");
    assert_eq!(created.sector, "");
    assert_eq!(created.email, "");
    assert_eq!(created.phone, "");
    assert_eq!(created.message, "");
    assert_eq!(created.presenter, client::DEFAULT_PRESENTER);
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn client_create_requires_name() {
    let db = setup_test_db().await;

    let err = client::create(&db, client::ClientInput::default())
        .await
        .expect_err("missing name must fail");
    assert!(matches!(err, ModelError::Validation(_)));

    let err = client::create(&db, named_client("   "))
        .await
        .expect_err("blank name must fail");
    assert!(matches!(err, ModelError::Validation(_)));
}

#[tokio::test]
async fn client_update_overwrites_all_fields() {
    let db = setup_test_db().await;
    let created = client::create(
        &db,
        client::ClientInput {
            name: Some("Acme".into()),
            contact: Some("Jo".into()),
            sector: Some("Tech".into()),
            ..Default::default()
        },
    )
    .await
    .expect("create");

    client::update(
        &db,
        created.id,
        client::ClientInput {
            name: Some("Acme Corp".into()),
            email: Some("hello@acme.example".into()),
            ..Default::default()
        },
    )
    .await
    .expect("update");

    let found = client::find(&db, created.id).await.expect("find").expect("exists");
    assert_eq!(found.name, "Acme Corp");
    assert_eq!(found.email, "hello@acme.example");
    // Overwrite semantics: fields omitted from the update become empty.
    assert_eq!(found.contact, "");
    assert_eq!(found.sector, "");
    assert_eq!(found.presenter, client::DEFAULT_PRESENTER);
    assert_eq!(found.created_at, created.created_at);
    assert!(found.updated_at >= created.updated_at);
}

#[tokio::test]
async fn client_update_unknown_id_is_noop() {
    let db = setup_test_db().await;
    let created = client::create(&db, named_client("Acme")).await.expect("create");

    client::update(&db, Uuid::new_v4(), named_client("Ghost"))
        .await
        .expect("unknown id update must succeed");

    let all = client::list_newest_first(&db).await.expect("list");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, created.id);
    assert_eq!(all[0].name, "Acme");
}

#[tokio::test]
async fn client_delete_cascades_to_grants() {
    let db = setup_test_db().await;
    let created = client::create(&db, named_client("Acme")).await.expect("create");
    grant::create(&db, created.id, grant::GrantInput::default()).await.expect("grant 1");
    grant::create(&db, created.id, grant::GrantInput::default()).await.expect("grant 2");

    client::delete(&db, created.id).await.expect("delete");

    assert!(client::find(&db, created.id).await.expect("find").is_none());
    let leftover = grant::list_for_client(&db, created.id).await.expect("list");
    assert!(leftover.is_empty());
}

#[tokio::test]
async fn client_delete_unknown_id_is_noop() {
    let db = setup_test_db().await;
    client::delete(&db, Uuid::new_v4()).await.expect("unknown id delete must succeed");
}

#[tokio::test]
async fn client_list_is_newest_first() {
    let db = setup_test_db().await;
    let first = client::create(&db, named_client("first")).await.expect("create");
    let second = client::create(&db, named_client("second")).await.expect("create");
    let third = client::create(&db, named_client("third")).await.expect("create");

    let all = client::list_newest_first(&db).await.expect("list");
    let ids: Vec<_> = all.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[tokio::test]
async fn grant_create_applies_defaults() {
    let db = setup_test_db().await;
    let owner = client::create(&db, named_client("Acme")).await.expect("create");

    let created = grant::create(&db, owner.id, grant::GrantInput::default()).await.expect("grant");

    assert_eq!(created.client_id, owner.id);
    assert_eq!(created.name, "");
    assert_eq!(created.funder, "");
    assert_eq!(created.category, "");
    assert_eq!(created.amount, "");
    assert_eq!(created.cover, "");
    assert_eq!(created.deadline, "");
    assert_eq!(created.notes, "");
    assert_eq!(created.status, grant::DEFAULT_STATUS);
    assert_eq!(created.match_pct, grant::DEFAULT_MATCH_PCT);
    assert_eq!(created.sort_order, 0);
}

#[tokio::test]
async fn grant_match_pct_zero_falls_back() {
    let db = setup_test_db().await;
    let owner = client::create(&db, named_client("Acme")).await.expect("create");

    let zeroed = grant::create(
        &db,
        owner.id,
        grant::GrantInput { match_pct: Some(0), ..Default::default() },
    )
    .await
    .expect("grant");
    assert_eq!(zeroed.match_pct, grant::DEFAULT_MATCH_PCT);

    let explicit = grant::create(
        &db,
        owner.id,
        grant::GrantInput { match_pct: Some(50), ..Default::default() },
    )
    .await
    .expect("grant");
    assert_eq!(explicit.match_pct, 50);
}

#[tokio::test]
async fn grant_update_overwrites_but_keeps_sort_order() {
    let db = setup_test_db().await;
    let owner = client::create(&db, named_client("Acme")).await.expect("create");
    grant::replace_for_client(
        &db,
        owner.id,
        vec![
            grant::GrantInput { name: Some("a".into()), ..Default::default() },
            grant::GrantInput { name: Some("b".into()), notes: Some("call them".into()), ..Default::default() },
        ],
    )
    .await
    .expect("replace");

    let second = grant::list_for_client(&db, owner.id).await.expect("list")[1].clone();
    assert_eq!(second.sort_order, 1);

    grant::update(
        &db,
        second.id,
        grant::GrantInput { name: Some("b2".into()), status: Some("won".into()), ..Default::default() },
    )
    .await
    .expect("update");

    let updated = grant::list_for_client(&db, owner.id).await.expect("list")[1].clone();
    assert_eq!(updated.id, second.id);
    assert_eq!(updated.name, "b2");
    assert_eq!(updated.status, "won");
    // Omitted fields fall back to the write defaults, position stays.
    assert_eq!(updated.notes, "");
    assert_eq!(updated.match_pct, grant::DEFAULT_MATCH_PCT);
    assert_eq!(updated.sort_order, 1);
}

#[tokio::test]
async fn grant_update_unknown_id_is_noop() {
    let db = setup_test_db().await;
    let owner = client::create(&db, named_client("Acme")).await.expect("create");
    grant::create(&db, owner.id, grant::GrantInput::default()).await.expect("grant");

    grant::update(&db, Uuid::new_v4(), grant::GrantInput { name: Some("ghost".into()), ..Default::default() })
        .await
        .expect("unknown id update must succeed");

    let all = grant::list_for_client(&db, owner.id).await.expect("list");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "");
}

#[tokio::test]
async fn grant_delete_unknown_id_is_noop() {
    let db = setup_test_db().await;
    grant::delete(&db, Uuid::new_v4()).await.expect("unknown id delete must succeed");
}
