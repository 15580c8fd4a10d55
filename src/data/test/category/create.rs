use super::*;

/// Creating a category returns its new ID.
#[tokio::test]
async fn creates_a_category() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let repo = CategoryRepository::new(db);

    let result = repo.create(server.server_id as u64, "Shooters").await?;
    let Inserted::Created(category_id) = result else {
        panic!("expected a created category, got {result:?}");
    };

    let stored = entity::prelude::Category::find_by_id(category_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Shooters");
    assert_eq!(stored.server_id, server.server_id);
    Ok(())
}

/// A duplicate name in the same server is reported, not failed.
#[tokio::test]
async fn duplicate_name_in_same_server_already_exists() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let repo = CategoryRepository::new(db);

    repo.create(server.server_id as u64, "Shooters").await?;
    let result = repo.create(server.server_id as u64, "Shooters").await?;

    assert_eq!(result, Inserted::AlreadyExists);
    Ok(())
}

/// The same name is free to reuse in a different server.
#[tokio::test]
async fn same_name_in_another_server_is_created() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::server::create_server(db).await?;
    let second = factory::server::create_server(db).await?;
    let repo = CategoryRepository::new(db);

    repo.create(first.server_id as u64, "Shooters").await?;
    let result = repo.create(second.server_id as u64, "Shooters").await?;

    assert!(result.is_created());
    Ok(())
}

/// Creating under an unregistered server is a not-found error.
#[tokio::test]
async fn unregistered_server_is_rejected() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CategoryRepository::new(db).create(42, "Shooters").await;

    assert!(matches!(result, Err(CatalogError::NotFound(_))));
    Ok(())
}
