use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, SqlErr,
};

use crate::data::server::ServerRepository;
use crate::error::CatalogError;
use crate::model::category::{Category, CategoryDeletion};
use crate::model::game::GameRef;
use crate::model::Inserted;

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category. Names are unique per server; a duplicate is
    /// reported as [`Inserted::AlreadyExists`].
    pub async fn create(&self, server_id: u64, name: &str) -> Result<Inserted<i32>, CatalogError> {
        ServerRepository::new(self.db).require(server_id).await?;

        let result = entity::category::ActiveModel {
            server_id: ActiveValue::Set(server_id as i64),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(category) => Ok(Inserted::Created(category.category_id)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(Inserted::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list(&self, server_id: u64) -> Result<Vec<Category>, CatalogError> {
        let categories = entity::prelude::Category::find()
            .filter(entity::category::Column::ServerId.eq(server_id as i64))
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;
        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// Deletes a category unless games still reference it; when blocked, the
    /// referencing games come back in the outcome and nothing is written.
    pub async fn delete(
        &self,
        category_id: i32,
        server_id: u64,
    ) -> Result<CategoryDeletion, CatalogError> {
        let sid = server_id as i64;
        let exists = entity::prelude::Category::find_by_id(category_id)
            .filter(entity::category::Column::ServerId.eq(sid))
            .count(self.db)
            .await?;
        if exists == 0 {
            return Ok(CategoryDeletion::NotFound);
        }

        let blocking = entity::prelude::Game::find()
            .filter(entity::game::Column::ServerId.eq(sid))
            .filter(entity::game::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await?;
        if !blocking.is_empty() {
            return Ok(CategoryDeletion::Blocked {
                games: blocking
                    .into_iter()
                    .map(|g| GameRef {
                        id: g.game_id,
                        name: g.name,
                    })
                    .collect(),
            });
        }

        entity::prelude::Category::delete_many()
            .filter(entity::category::Column::CategoryId.eq(category_id))
            .filter(entity::category::Column::ServerId.eq(sid))
            .exec(self.db)
            .await?;
        Ok(CategoryDeletion::Deleted)
    }

    /// Assigns an existing category to an existing game. Both must belong to
    /// the server.
    pub async fn assign_to_game(
        &self,
        game_id: i32,
        server_id: u64,
        category_id: i32,
    ) -> Result<(), CatalogError> {
        let sid = server_id as i64;
        let Some(game) = entity::prelude::Game::find_by_id(game_id)
            .filter(entity::game::Column::ServerId.eq(sid))
            .one(self.db)
            .await?
        else {
            return Err(CatalogError::NotFound(format!(
                "game {game_id} does not exist in this server"
            )));
        };
        let category_exists = entity::prelude::Category::find_by_id(category_id)
            .filter(entity::category::Column::ServerId.eq(sid))
            .count(self.db)
            .await?;
        if category_exists == 0 {
            return Err(CatalogError::NotFound(format!(
                "category {category_id} does not exist in this server"
            )));
        }

        let mut active: entity::game::ActiveModel = game.into();
        active.category_id = ActiveValue::Set(Some(category_id));
        active.update(self.db).await?;
        Ok(())
    }
}
