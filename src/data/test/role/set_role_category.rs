use super::*;

/// Assigning and clearing a role's category round-trips.
#[tokio::test]
async fn assigns_and_clears_a_role_category() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let role = factory::role::create_role(db, server.server_id).await?;
    let category = factory::role_category::create_role_category(db, server.server_id).await?;
    let repo = RoleRepository::new(db);
    let sid = server.server_id as u64;

    assert!(
        repo.set_role_category(role.role_id as u64, sid, Some(category.role_category_id))
            .await?
    );
    let stored = entity::prelude::Role::find_by_id(role.role_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.role_category_id, Some(category.role_category_id));

    assert!(repo.set_role_category(role.role_id as u64, sid, None).await?);
    let stored = entity::prelude::Role::find_by_id(role.role_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.role_category_id, None);
    Ok(())
}

/// Clearing an unknown role reports false; assigning to one is an error.
#[tokio::test]
async fn unknown_role_clears_false_but_assigns_error() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let category = factory::role_category::create_role_category(db, server.server_id).await?;
    let repo = RoleRepository::new(db);
    let sid = server.server_id as u64;

    assert!(!repo.set_role_category(555, sid, None).await?);
    let result = repo
        .set_role_category(555, sid, Some(category.role_category_id))
        .await;
    assert!(matches!(result, Err(CatalogError::NotFound(_))));
    Ok(())
}

/// A role category from another server cannot be assigned.
#[tokio::test]
async fn category_from_another_server_is_rejected() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let other = factory::server::create_server(db).await?;
    let role = factory::role::create_role(db, server.server_id).await?;
    let foreign = factory::role_category::create_role_category(db, other.server_id).await?;

    let result = RoleRepository::new(db)
        .set_role_category(
            role.role_id as u64,
            server.server_id as u64,
            Some(foreign.role_category_id),
        )
        .await;

    assert!(matches!(result, Err(CatalogError::NotFound(_))));
    Ok(())
}
