use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, SqlErr,
};

use crate::data::server::ServerRepository;
use crate::error::CatalogError;
use crate::model::game::GameRef;
use crate::model::role::{Role, RoleRemovalMode, RoleRemovalOutcome};
use crate::model::Inserted;

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Mirrors a Discord role into the catalog. Re-creating a known role is
    /// a no-op reported as [`Inserted::AlreadyExists`].
    pub async fn create(&self, server_id: u64, role_id: u64) -> Result<Inserted<()>, CatalogError> {
        ServerRepository::new(self.db).require(server_id).await?;

        let result = entity::role::ActiveModel {
            role_id: ActiveValue::Set(role_id as i64),
            server_id: ActiveValue::Set(server_id as i64),
            role_category_id: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(_) => Ok(Inserted::Created(())),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(Inserted::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list(&self, server_id: u64) -> Result<Vec<Role>, CatalogError> {
        let roles = entity::prelude::Role::find()
            .filter(entity::role::Column::ServerId.eq(server_id as i64))
            .order_by_asc(entity::role::Column::RoleId)
            .all(self.db)
            .await?;
        Ok(roles.into_iter().map(Role::from_entity).collect())
    }

    /// The role IDs mapped to a game. A game outside this server yields an
    /// empty list.
    pub async fn game_roles(&self, game_id: i32, server_id: u64) -> Result<Vec<u64>, CatalogError> {
        let in_server = entity::prelude::Game::find_by_id(game_id)
            .filter(entity::game::Column::ServerId.eq(server_id as i64))
            .count(self.db)
            .await?;
        if in_server == 0 {
            return Ok(Vec::new());
        }

        let links = entity::prelude::GameRole::find()
            .filter(entity::game_role::Column::GameId.eq(game_id))
            .order_by_asc(entity::game_role::Column::RoleId)
            .all(self.db)
            .await?;
        Ok(links.into_iter().map(|link| link.role_id as u64).collect())
    }

    /// Maps roles onto a game. Every role must already be mirrored in this
    /// server; existing mappings are left alone.
    pub async fn map_to_game(
        &self,
        game_id: i32,
        server_id: u64,
        role_ids: &[u64],
    ) -> Result<(), CatalogError> {
        let sid = server_id as i64;
        let game_exists = entity::prelude::Game::find_by_id(game_id)
            .filter(entity::game::Column::ServerId.eq(sid))
            .count(self.db)
            .await?;
        if game_exists == 0 {
            return Err(CatalogError::NotFound(format!(
                "game {game_id} does not exist in this server"
            )));
        }

        for &role_id in role_ids {
            let role_exists = entity::prelude::Role::find_by_id(role_id as i64)
                .filter(entity::role::Column::ServerId.eq(sid))
                .count(self.db)
                .await?;
            if role_exists == 0 {
                return Err(CatalogError::NotFound(format!(
                    "role {role_id} does not exist in this server"
                )));
            }

            entity::prelude::GameRole::insert(entity::game_role::ActiveModel {
                game_id: ActiveValue::Set(game_id),
                role_id: ActiveValue::Set(role_id as i64),
            })
            .on_conflict(
                OnConflict::columns([
                    entity::game_role::Column::GameId,
                    entity::game_role::Column::RoleId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;
        }
        Ok(())
    }

    /// Assigns a role to a role category, or clears the assignment when
    /// `role_category_id` is `None`. Clearing an unknown role returns
    /// `false`; assigning to one is an error.
    pub async fn set_role_category(
        &self,
        role_id: u64,
        server_id: u64,
        role_category_id: Option<i32>,
    ) -> Result<bool, CatalogError> {
        let sid = server_id as i64;
        let role = entity::prelude::Role::find_by_id(role_id as i64)
            .filter(entity::role::Column::ServerId.eq(sid))
            .one(self.db)
            .await?;
        let Some(role) = role else {
            return match role_category_id {
                None => Ok(false),
                Some(_) => Err(CatalogError::NotFound(format!(
                    "role {role_id} does not exist in this server"
                ))),
            };
        };

        if let Some(category_id) = role_category_id {
            let exists = entity::prelude::RoleCategory::find_by_id(category_id)
                .filter(entity::role_category::Column::ServerId.eq(sid))
                .count(self.db)
                .await?;
            if exists == 0 {
                return Err(CatalogError::NotFound(format!(
                    "role category {category_id} does not exist in this server"
                )));
            }
        }

        let mut active: entity::role::ActiveModel = role.into();
        active.role_category_id = ActiveValue::Set(role_category_id);
        active.update(self.db).await?;
        Ok(true)
    }

    /// Processes a role that no longer exists on Discord. The affected-games
    /// list is collected before anything is removed.
    pub async fn handle_removed(
        &self,
        role_id: u64,
        server_id: u64,
        mode: RoleRemovalMode,
    ) -> Result<RoleRemovalOutcome, CatalogError> {
        let sid = server_id as i64;
        let rid = role_id as i64;
        let known = entity::prelude::Role::find_by_id(rid)
            .filter(entity::role::Column::ServerId.eq(sid))
            .count(self.db)
            .await?;
        if known == 0 {
            return Ok(RoleRemovalOutcome::NotFound);
        }

        let links = entity::prelude::GameRole::find()
            .filter(entity::game_role::Column::RoleId.eq(rid))
            .all(self.db)
            .await?;
        let affected_games = if links.is_empty() {
            Vec::new()
        } else {
            let game_ids: Vec<i32> = links.iter().map(|link| link.game_id).collect();
            entity::prelude::Game::find()
                .filter(entity::game::Column::ServerId.eq(sid))
                .filter(entity::game::Column::GameId.is_in(game_ids))
                .order_by_asc(entity::game::Column::Name)
                .all(self.db)
                .await?
                .into_iter()
                .map(|g| GameRef {
                    id: g.game_id,
                    name: g.name,
                })
                .collect()
        };

        let unmapped = entity::prelude::GameRole::delete_many()
            .filter(entity::game_role::Column::RoleId.eq(rid))
            .exec(self.db)
            .await?;
        let record_deleted = match mode {
            RoleRemovalMode::Delete => {
                entity::prelude::Role::delete_many()
                    .filter(entity::role::Column::RoleId.eq(rid))
                    .filter(entity::role::Column::ServerId.eq(sid))
                    .exec(self.db)
                    .await?;
                true
            }
            RoleRemovalMode::UnmapOnly => false,
        };

        Ok(RoleRemovalOutcome::Removed {
            affected_games,
            mappings_removed: unmapped.rows_affected,
            record_deleted,
        })
    }
}
