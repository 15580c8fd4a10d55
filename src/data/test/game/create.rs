use super::*;

/// Creating a game persists its fields and returns the new ID.
#[tokio::test]
async fn creates_a_game() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let category = factory::category::create_category(db, server.server_id).await?;
    let repo = GameRepository::new(db);

    let game_id = repo
        .create(CreateGameParams {
            server_id: server.server_id as u64,
            name: "Valorant".to_string(),
            description: Some("Tactical shooter".to_string()),
            category_id: Some(category.category_id),
        })
        .await?;

    let stored = entity::prelude::Game::find_by_id(game_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Valorant");
    assert_eq!(stored.description.as_deref(), Some("Tactical shooter"));
    assert_eq!(stored.category_id, Some(category.category_id));
    assert_eq!(stored.server_id, server.server_id);
    Ok(())
}

/// An empty description is stored as null.
#[tokio::test]
async fn empty_description_is_stored_as_null() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let repo = GameRepository::new(db);

    let game_id = repo
        .create(CreateGameParams {
            description: Some("   ".to_string()),
            ..params(server.server_id, "Valorant")
        })
        .await?;

    let stored = entity::prelude::Game::find_by_id(game_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.description, None);
    Ok(())
}

/// Creating under an unregistered server is a not-found error.
#[tokio::test]
async fn unregistered_server_is_rejected() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameRepository::new(db).create(params(42, "Valorant")).await;

    assert!(matches!(result, Err(CatalogError::NotFound(_))));
    Ok(())
}

/// A category from another server cannot be attached at creation.
#[tokio::test]
async fn category_from_another_server_is_rejected() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let other = factory::server::create_server(db).await?;
    let foreign = factory::category::create_category(db, other.server_id).await?;

    let result = GameRepository::new(db)
        .create(CreateGameParams {
            category_id: Some(foreign.category_id),
            ..params(server.server_id, "Valorant")
        })
        .await;

    assert!(matches!(result, Err(CatalogError::NotFound(_))));
    Ok(())
}
