use super::*;

/// Detaching removes the link but keeps the tag row.
#[tokio::test]
async fn detaches_the_tag_but_keeps_the_row() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, game) = factory::helpers::create_server_with_game(db).await?;
    let tag = factory::tag::create_tag_named(db, server.server_id, "fps").await?;
    let repo = TagRepository::new(db);
    repo.add_to_game_by_ids(game.game_id, server.server_id as u64, &[tag.tag_id])
        .await?;

    let removed = repo
        .remove_from_game(game.game_id, server.server_id as u64, "fps")
        .await?;

    assert!(removed);
    assert_eq!(linked_tag_ids(db, game.game_id).await?, Vec::<i32>::new());
    let kept = entity::prelude::Tag::find_by_id(tag.tag_id).count(db).await?;
    assert_eq!(kept, 1);
    Ok(())
}

/// Detaching a tag that was never attached reports false.
#[tokio::test]
async fn unattached_tag_reports_false() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, game) = factory::helpers::create_server_with_game(db).await?;
    factory::tag::create_tag_named(db, server.server_id, "fps").await?;

    let removed = TagRepository::new(db)
        .remove_from_game(game.game_id, server.server_id as u64, "fps")
        .await?;

    assert!(!removed);
    Ok(())
}

/// An unknown tag name or game reports false rather than failing.
#[tokio::test]
async fn unknown_tag_or_game_reports_false() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, game) = factory::helpers::create_server_with_game(db).await?;
    let repo = TagRepository::new(db);

    assert!(
        !repo
            .remove_from_game(game.game_id, server.server_id as u64, "nope")
            .await?
    );
    assert!(
        !repo
            .remove_from_game(9999, server.server_id as u64, "nope")
            .await?
    );
    Ok(())
}
