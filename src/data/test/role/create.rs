use super::*;

/// Mirroring a role stores it unassigned to any role category.
#[tokio::test]
async fn mirrors_a_role() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let repo = RoleRepository::new(db);

    let result = repo.create(server.server_id as u64, 555).await?;
    assert_eq!(result, Inserted::Created(()));

    let roles = repo.list(server.server_id as u64).await?;
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].id, 555);
    assert_eq!(roles[0].role_category_id, None);
    Ok(())
}

/// Mirroring a known role again is reported, not failed.
#[tokio::test]
async fn remirroring_already_exists() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let repo = RoleRepository::new(db);

    repo.create(server.server_id as u64, 555).await?;
    let result = repo.create(server.server_id as u64, 555).await?;

    assert_eq!(result, Inserted::AlreadyExists);
    Ok(())
}

/// Mirroring under an unregistered server is a not-found error.
#[tokio::test]
async fn unregistered_server_is_rejected() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoleRepository::new(db).create(42, 555).await;

    assert!(matches!(result, Err(CatalogError::NotFound(_))));
    Ok(())
}

/// Listing scopes to the requested server and orders by role ID.
#[tokio::test]
async fn list_is_scoped_and_ordered() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let other = factory::server::create_server(db).await?;
    let repo = RoleRepository::new(db);
    repo.create(server.server_id as u64, 900).await?;
    repo.create(server.server_id as u64, 100).await?;
    repo.create(other.server_id as u64, 500).await?;

    let roles = repo.list(server.server_id as u64).await?;

    assert_eq!(roles.iter().map(|r| r.id).collect::<Vec<_>>(), vec![100, 900]);
    Ok(())
}
