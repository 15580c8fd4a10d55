use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::data::server::ServerRepository;
use crate::error::CatalogError;
use crate::model::role_category::{RoleCategory, RoleCategoryDeletion};

pub struct RoleCategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleCategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a role category and returns its ID. Unlike categories and
    /// tags, names carry no uniqueness constraint.
    pub async fn create(&self, server_id: u64, name: &str) -> Result<i32, CatalogError> {
        ServerRepository::new(self.db).require(server_id).await?;

        let category = entity::role_category::ActiveModel {
            server_id: ActiveValue::Set(server_id as i64),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(category.role_category_id)
    }

    pub async fn list(&self, server_id: u64) -> Result<Vec<RoleCategory>, CatalogError> {
        let categories = entity::prelude::RoleCategory::find()
            .filter(entity::role_category::Column::ServerId.eq(server_id as i64))
            .order_by_asc(entity::role_category::Column::Name)
            .all(self.db)
            .await?;
        Ok(categories
            .into_iter()
            .map(RoleCategory::from_entity)
            .collect())
    }

    /// Deletes a role category unless roles still reference it; when blocked,
    /// the referencing role IDs come back and nothing is written.
    pub async fn delete(
        &self,
        role_category_id: i32,
        server_id: u64,
    ) -> Result<RoleCategoryDeletion, CatalogError> {
        let sid = server_id as i64;
        let exists = entity::prelude::RoleCategory::find_by_id(role_category_id)
            .filter(entity::role_category::Column::ServerId.eq(sid))
            .count(self.db)
            .await?;
        if exists == 0 {
            return Ok(RoleCategoryDeletion::NotFound);
        }

        let blocking = entity::prelude::Role::find()
            .filter(entity::role::Column::RoleCategoryId.eq(role_category_id))
            .order_by_asc(entity::role::Column::RoleId)
            .all(self.db)
            .await?;
        if !blocking.is_empty() {
            return Ok(RoleCategoryDeletion::Blocked {
                roles: blocking.into_iter().map(|r| r.role_id as u64).collect(),
            });
        }

        entity::prelude::RoleCategory::delete_many()
            .filter(entity::role_category::Column::RoleCategoryId.eq(role_category_id))
            .filter(entity::role_category::Column::ServerId.eq(sid))
            .exec(self.db)
            .await?;
        Ok(RoleCategoryDeletion::Deleted)
    }
}
