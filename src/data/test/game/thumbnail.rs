use super::*;

/// Setting, reading, and clearing a thumbnail round-trips the bytes.
#[tokio::test]
async fn sets_reads_and_clears_a_thumbnail() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, game) = factory::helpers::create_server_with_game(db).await?;
    let repo = GameRepository::new(db);
    let sid = server.server_id as u64;

    assert!(repo.set_thumbnail(game.game_id, sid, vec![1, 2, 3]).await?);
    assert_eq!(
        repo.get_thumbnail(game.game_id, sid).await?,
        Some(vec![1, 2, 3])
    );

    assert!(repo.clear_thumbnail(game.game_id, sid).await?);
    assert_eq!(repo.get_thumbnail(game.game_id, sid).await?, None);
    Ok(())
}

/// A game without a thumbnail reads back as none.
#[tokio::test]
async fn missing_thumbnail_reads_as_none() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, game) = factory::helpers::create_server_with_game(db).await?;

    let thumbnail = GameRepository::new(db)
        .get_thumbnail(game.game_id, server.server_id as u64)
        .await?;

    assert_eq!(thumbnail, None);
    Ok(())
}

/// Another server's ID can neither write nor read the thumbnail.
#[tokio::test]
async fn other_servers_cannot_touch_it() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, game) = factory::helpers::create_server_with_game(db).await?;
    let other = factory::server::create_server(db).await?;
    let repo = GameRepository::new(db);
    repo.set_thumbnail(game.game_id, server.server_id as u64, vec![7])
        .await?;

    assert!(
        !repo
            .set_thumbnail(game.game_id, other.server_id as u64, vec![9])
            .await?
    );
    assert_eq!(
        repo.get_thumbnail(game.game_id, other.server_id as u64)
            .await?,
        None
    );
    assert_eq!(
        repo.get_thumbnail(game.game_id, server.server_id as u64)
            .await?,
        Some(vec![7])
    );
    Ok(())
}
