use super::*;

/// An unreferenced role category is deleted outright.
#[tokio::test]
async fn deletes_an_unreferenced_role_category() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let category = factory::role_category::create_role_category(db, server.server_id).await?;

    let outcome = RoleCategoryRepository::new(db)
        .delete(category.role_category_id, server.server_id as u64)
        .await?;

    assert_eq!(outcome, RoleCategoryDeletion::Deleted);
    let remaining = entity::prelude::RoleCategory::find_by_id(category.role_category_id)
        .count(db)
        .await?;
    assert_eq!(remaining, 0);
    Ok(())
}

/// Deletion is refused while roles reference it, naming the blocking roles.
#[tokio::test]
async fn refuses_while_roles_reference_it() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let category = factory::role_category::create_role_category(db, server.server_id).await?;
    let role = factory::role::create_role(db, server.server_id).await?;
    RoleRepository::new(db)
        .set_role_category(
            role.role_id as u64,
            server.server_id as u64,
            Some(category.role_category_id),
        )
        .await?;

    let outcome = RoleCategoryRepository::new(db)
        .delete(category.role_category_id, server.server_id as u64)
        .await?;

    assert_eq!(
        outcome,
        RoleCategoryDeletion::Blocked {
            roles: vec![role.role_id as u64]
        }
    );
    let kept = entity::prelude::RoleCategory::find_by_id(category.role_category_id)
        .count(db)
        .await?;
    assert_eq!(kept, 1);
    Ok(())
}

/// Another server's ID does not reach the role category.
#[tokio::test]
async fn other_servers_cannot_delete_it() -> Result<(), CatalogError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;
    let other = factory::server::create_server(db).await?;
    let category = factory::role_category::create_role_category(db, server.server_id).await?;

    let outcome = RoleCategoryRepository::new(db)
        .delete(category.role_category_id, other.server_id as u64)
        .await?;

    assert_eq!(outcome, RoleCategoryDeletion::NotFound);
    Ok(())
}
