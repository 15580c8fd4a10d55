use super::*;

/// Assigning a category updates the game's reference.
#[tokio::test]
async fn assigns_a_category_to_a_game() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let game = factory::game::create_game(db, server.server_id).await?;
    let category = factory::category::create_category(db, server.server_id).await?;

    CategoryRepository::new(db)
        .assign_to_game(game.game_id, server.server_id as u64, category.category_id)
        .await?;

    let stored = entity::prelude::Game::find_by_id(game.game_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.category_id, Some(category.category_id));
    Ok(())
}

/// Assigning to an unknown game is a not-found error.
#[tokio::test]
async fn unknown_game_is_rejected() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let category = factory::category::create_category(db, server.server_id).await?;

    let result = CategoryRepository::new(db)
        .assign_to_game(9999, server.server_id as u64, category.category_id)
        .await;

    assert!(matches!(result, Err(CatalogError::NotFound(_))));
    Ok(())
}

/// A category belonging to another server cannot be assigned.
#[tokio::test]
async fn category_from_another_server_is_rejected() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let other = factory::server::create_server(db).await?;
    let game = factory::game::create_game(db, server.server_id).await?;
    let foreign = factory::category::create_category(db, other.server_id).await?;

    let result = CategoryRepository::new(db)
        .assign_to_game(game.game_id, server.server_id as u64, foreign.category_id)
        .await;

    assert!(matches!(result, Err(CatalogError::NotFound(_))));
    let stored = entity::prelude::Game::find_by_id(game.game_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.category_id, None);
    Ok(())
}
