use super::*;

/// Mapping roles onto a game records the links and reads back ordered.
#[tokio::test]
async fn maps_roles_onto_a_game() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, game) = factory::helpers::create_server_with_game(db).await?;
    let repo = RoleRepository::new(db);
    repo.create(server.server_id as u64, 700).await?;
    repo.create(server.server_id as u64, 300).await?;

    repo.map_to_game(game.game_id, server.server_id as u64, &[700, 300])
        .await?;

    let mapped = repo
        .game_roles(game.game_id, server.server_id as u64)
        .await?;
    assert_eq!(mapped, vec![300, 700]);
    Ok(())
}

/// Re-mapping an already-mapped role is a no-op.
#[tokio::test]
async fn remapping_is_a_noop() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, game) = factory::helpers::create_server_with_game(db).await?;
    let repo = RoleRepository::new(db);
    repo.create(server.server_id as u64, 700).await?;

    repo.map_to_game(game.game_id, server.server_id as u64, &[700])
        .await?;
    repo.map_to_game(game.game_id, server.server_id as u64, &[700])
        .await?;

    let links = entity::prelude::GameRole::find()
        .filter(entity::game_role::Column::GameId.eq(game.game_id))
        .count(db)
        .await?;
    assert_eq!(links, 1);
    Ok(())
}

/// An unmirrored role cannot be mapped.
#[tokio::test]
async fn unmirrored_roles_are_rejected() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, game) = factory::helpers::create_server_with_game(db).await?;

    let result = RoleRepository::new(db)
        .map_to_game(game.game_id, server.server_id as u64, &[555])
        .await;

    assert!(matches!(result, Err(CatalogError::NotFound(_))));
    Ok(())
}

/// A role mirrored in another server cannot be mapped here.
#[tokio::test]
async fn roles_from_other_servers_are_rejected() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, game) = factory::helpers::create_server_with_game(db).await?;
    let other = factory::server::create_server(db).await?;
    let foreign = factory::role::create_role(db, other.server_id).await?;

    let result = RoleRepository::new(db)
        .map_to_game(game.game_id, server.server_id as u64, &[foreign.role_id as u64])
        .await;

    assert!(matches!(result, Err(CatalogError::NotFound(_))));
    Ok(())
}

/// Reading mappings through the wrong server yields nothing.
#[tokio::test]
async fn game_roles_scope_to_the_server() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, game) = factory::helpers::create_server_with_game(db).await?;
    let other = factory::server::create_server(db).await?;
    let repo = RoleRepository::new(db);
    repo.create(server.server_id as u64, 700).await?;
    repo.map_to_game(game.game_id, server.server_id as u64, &[700])
        .await?;

    let mapped = repo.game_roles(game.game_id, other.server_id as u64).await?;

    assert!(mapped.is_empty());
    Ok(())
}
