use std::collections::{HashMap, HashSet};

use migration::OnConflict;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::data::server::ServerRepository;
use crate::error::CatalogError;
use crate::model::category::Category;
use crate::model::game::{CreateGameParams, GameChanges, GameSummary, ReplaceGameParams};
use crate::model::role::Role;
use crate::model::tag::Tag;

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a game and returns its ID. The server must be registered and
    /// the category, when given, must belong to it.
    pub async fn create(&self, params: CreateGameParams) -> Result<i32, CatalogError> {
        ServerRepository::new(self.db)
            .require(params.server_id)
            .await?;
        if let Some(category_id) = params.category_id {
            self.require_category(category_id, params.server_id as i64)
                .await?;
        }

        let game = entity::game::ActiveModel {
            server_id: ActiveValue::Set(params.server_id as i64),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(normalize_description(params.description)),
            category_id: ActiveValue::Set(params.category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(game.game_id)
    }

    /// Applies a sparse update. Returns `false` when the game does not exist
    /// in this server; untouched fields stay as they are.
    pub async fn update(
        &self,
        game_id: i32,
        server_id: u64,
        changes: GameChanges,
    ) -> Result<bool, CatalogError> {
        let Some(game) = self.fetch(game_id, server_id).await? else {
            return Ok(false);
        };
        if changes.is_empty() {
            return Ok(true);
        }
        if let Some(Some(category_id)) = changes.category_id {
            self.require_category(category_id, server_id as i64).await?;
        }

        let mut active: entity::game::ActiveModel = game.into();
        if let Some(name) = changes.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = changes.description {
            active.description = ActiveValue::Set(normalize_description(description));
        }
        if let Some(category_id) = changes.category_id {
            active.category_id = ActiveValue::Set(category_id);
        }
        active.update(self.db).await?;

        Ok(true)
    }

    /// Replaces a game's fields and reconciles its tag and role sets against
    /// the given targets. Returns `false` when the game does not exist in
    /// this server.
    pub async fn replace(
        &self,
        game_id: i32,
        server_id: u64,
        params: ReplaceGameParams,
    ) -> Result<bool, CatalogError> {
        let Some(game) = self.fetch(game_id, server_id).await? else {
            return Ok(false);
        };
        let sid = server_id as i64;
        if let Some(category_id) = params.category_id {
            self.require_category(category_id, sid).await?;
        }
        let tag_ids = self.require_tags(&params.tag_ids, sid).await?;
        let role_ids = self.require_roles(&params.role_ids, sid).await?;

        let mut active: entity::game::ActiveModel = game.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(normalize_description(params.description));
        active.category_id = ActiveValue::Set(params.category_id);
        active.update(self.db).await?;

        self.sync_tags(game_id, &tag_ids).await?;
        self.sync_roles(game_id, &role_ids).await?;

        Ok(true)
    }

    /// Deletes a game and its tag/role mappings. Returns `false` when the
    /// game does not exist in this server.
    pub async fn delete(&self, game_id: i32, server_id: u64) -> Result<bool, CatalogError> {
        if self.fetch(game_id, server_id).await?.is_none() {
            return Ok(false);
        }

        // Mappings go first; SQLite only cascades with foreign_keys=ON.
        entity::prelude::GameTag::delete_many()
            .filter(entity::game_tag::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;
        entity::prelude::GameRole::delete_many()
            .filter(entity::game_role::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;
        entity::prelude::Game::delete_many()
            .filter(entity::game::Column::GameId.eq(game_id))
            .filter(entity::game::Column::ServerId.eq(server_id as i64))
            .exec(self.db)
            .await?;

        Ok(true)
    }

    pub async fn set_thumbnail(
        &self,
        game_id: i32,
        server_id: u64,
        bytes: Vec<u8>,
    ) -> Result<bool, CatalogError> {
        self.write_thumbnail(game_id, server_id, Some(bytes)).await
    }

    pub async fn clear_thumbnail(&self, game_id: i32, server_id: u64) -> Result<bool, CatalogError> {
        self.write_thumbnail(game_id, server_id, None).await
    }

    /// Returns the stored thumbnail bytes, or `None` when the game is absent
    /// or has no thumbnail.
    pub async fn get_thumbnail(
        &self,
        game_id: i32,
        server_id: u64,
    ) -> Result<Option<Vec<u8>>, CatalogError> {
        Ok(self
            .fetch(game_id, server_id)
            .await?
            .and_then(|game| game.thumbnail))
    }

    pub async fn list_by_server(&self, server_id: u64) -> Result<Vec<GameSummary>, CatalogError> {
        let games = entity::prelude::Game::find()
            .filter(entity::game::Column::ServerId.eq(server_id as i64))
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await?;
        self.summarize(server_id as i64, games).await
    }

    /// Case-insensitive substring search on game names.
    pub async fn find_by_name(
        &self,
        server_id: u64,
        query: &str,
    ) -> Result<Vec<GameSummary>, CatalogError> {
        let pattern = format!("%{}%", query.to_lowercase());
        let games = entity::prelude::Game::find()
            .filter(entity::game::Column::ServerId.eq(server_id as i64))
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    entity::game::Entity,
                    entity::game::Column::Name,
                ))))
                .like(pattern),
            )
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await?;
        self.summarize(server_id as i64, games).await
    }

    /// Games in the category with the given exact name. An unknown category
    /// name yields an empty list.
    pub async fn find_by_category(
        &self,
        server_id: u64,
        category_name: &str,
    ) -> Result<Vec<GameSummary>, CatalogError> {
        let sid = server_id as i64;
        let Some(category) = entity::prelude::Category::find()
            .filter(entity::category::Column::ServerId.eq(sid))
            .filter(entity::category::Column::Name.eq(category_name))
            .one(self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        let games = entity::prelude::Game::find()
            .filter(entity::game::Column::ServerId.eq(sid))
            .filter(entity::game::Column::CategoryId.eq(category.category_id))
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await?;
        self.summarize(sid, games).await
    }

    /// Games carrying every one of the given tag names (containment, not
    /// overlap). An empty query, or a name with no tag row, yields an empty
    /// list.
    pub async fn find_by_tags(
        &self,
        server_id: u64,
        tag_names: &[String],
    ) -> Result<Vec<GameSummary>, CatalogError> {
        let sid = server_id as i64;
        let names: HashSet<&str> = tag_names.iter().map(String::as_str).collect();
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let tags = entity::prelude::Tag::find()
            .filter(entity::tag::Column::ServerId.eq(sid))
            .filter(entity::tag::Column::Name.is_in(names.iter().copied()))
            .all(self.db)
            .await?;
        if tags.len() < names.len() {
            // Some queried tag does not exist, so no game can carry them all.
            return Ok(Vec::new());
        }
        let tag_ids: Vec<i32> = tags.iter().map(|t| t.tag_id).collect();

        let links = entity::prelude::GameTag::find()
            .filter(entity::game_tag::Column::TagId.is_in(tag_ids.clone()))
            .all(self.db)
            .await?;
        let mut matches_per_game: HashMap<i32, usize> = HashMap::new();
        for link in links {
            *matches_per_game.entry(link.game_id).or_insert(0) += 1;
        }
        let matching: Vec<i32> = matches_per_game
            .into_iter()
            .filter(|&(_, count)| count == tag_ids.len())
            .map(|(game_id, _)| game_id)
            .collect();
        if matching.is_empty() {
            return Ok(Vec::new());
        }

        let games = entity::prelude::Game::find()
            .filter(entity::game::Column::ServerId.eq(sid))
            .filter(entity::game::Column::GameId.is_in(matching))
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await?;
        self.summarize(sid, games).await
    }

    async fn fetch(
        &self,
        game_id: i32,
        server_id: u64,
    ) -> Result<Option<entity::game::Model>, CatalogError> {
        Ok(entity::prelude::Game::find_by_id(game_id)
            .filter(entity::game::Column::ServerId.eq(server_id as i64))
            .one(self.db)
            .await?)
    }

    async fn write_thumbnail(
        &self,
        game_id: i32,
        server_id: u64,
        thumbnail: Option<Vec<u8>>,
    ) -> Result<bool, CatalogError> {
        let Some(game) = self.fetch(game_id, server_id).await? else {
            return Ok(false);
        };
        let mut active: entity::game::ActiveModel = game.into();
        active.thumbnail = ActiveValue::Set(thumbnail);
        active.update(self.db).await?;
        Ok(true)
    }

    async fn require_category(&self, category_id: i32, sid: i64) -> Result<(), CatalogError> {
        let count = entity::prelude::Category::find_by_id(category_id)
            .filter(entity::category::Column::ServerId.eq(sid))
            .count(self.db)
            .await?;
        if count == 0 {
            return Err(CatalogError::NotFound(format!(
                "category {category_id} does not exist in this server"
            )));
        }
        Ok(())
    }

    async fn require_tags(&self, tag_ids: &[i32], sid: i64) -> Result<HashSet<i32>, CatalogError> {
        let desired: HashSet<i32> = tag_ids.iter().copied().collect();
        if desired.is_empty() {
            return Ok(desired);
        }
        let found: HashSet<i32> = entity::prelude::Tag::find()
            .filter(entity::tag::Column::ServerId.eq(sid))
            .filter(entity::tag::Column::TagId.is_in(desired.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| t.tag_id)
            .collect();
        if let Some(missing) = desired.difference(&found).next() {
            return Err(CatalogError::NotFound(format!(
                "tag {missing} does not exist in this server"
            )));
        }
        Ok(desired)
    }

    async fn require_roles(&self, role_ids: &[u64], sid: i64) -> Result<HashSet<i64>, CatalogError> {
        let desired: HashSet<i64> = role_ids.iter().map(|&id| id as i64).collect();
        if desired.is_empty() {
            return Ok(desired);
        }
        let found: HashSet<i64> = entity::prelude::Role::find()
            .filter(entity::role::Column::ServerId.eq(sid))
            .filter(entity::role::Column::RoleId.is_in(desired.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| r.role_id)
            .collect();
        if let Some(missing) = desired.difference(&found).next() {
            return Err(CatalogError::NotFound(format!(
                "role {} does not exist in this server",
                *missing as u64
            )));
        }
        Ok(desired)
    }

    /// Reconciles the game's tag links against `desired`: removals first,
    /// then additions, each step idempotent.
    async fn sync_tags(&self, game_id: i32, desired: &HashSet<i32>) -> Result<(), CatalogError> {
        let current: HashSet<i32> = entity::prelude::GameTag::find()
            .filter(entity::game_tag::Column::GameId.eq(game_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.tag_id)
            .collect();

        for &tag_id in current.difference(desired) {
            entity::prelude::GameTag::delete_many()
                .filter(entity::game_tag::Column::GameId.eq(game_id))
                .filter(entity::game_tag::Column::TagId.eq(tag_id))
                .exec(self.db)
                .await?;
        }
        for &tag_id in desired.difference(&current) {
            entity::prelude::GameTag::insert(entity::game_tag::ActiveModel {
                game_id: ActiveValue::Set(game_id),
                tag_id: ActiveValue::Set(tag_id),
            })
            .on_conflict(
                OnConflict::columns([
                    entity::game_tag::Column::GameId,
                    entity::game_tag::Column::TagId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;
        }
        Ok(())
    }

    async fn sync_roles(&self, game_id: i32, desired: &HashSet<i64>) -> Result<(), CatalogError> {
        let current: HashSet<i64> = entity::prelude::GameRole::find()
            .filter(entity::game_role::Column::GameId.eq(game_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.role_id)
            .collect();

        for &role_id in current.difference(desired) {
            entity::prelude::GameRole::delete_many()
                .filter(entity::game_role::Column::GameId.eq(game_id))
                .filter(entity::game_role::Column::RoleId.eq(role_id))
                .exec(self.db)
                .await?;
        }
        for &role_id in desired.difference(&current) {
            entity::prelude::GameRole::insert(entity::game_role::ActiveModel {
                game_id: ActiveValue::Set(game_id),
                role_id: ActiveValue::Set(role_id),
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

    /// Resolves categories, tags, and roles for a page of games fetched from
    /// one server.
    async fn summarize(
        &self,
        sid: i64,
        games: Vec<entity::game::Model>,
    ) -> Result<Vec<GameSummary>, CatalogError> {
        if games.is_empty() {
            return Ok(Vec::new());
        }
        let game_ids: Vec<i32> = games.iter().map(|g| g.game_id).collect();

        let categories: HashMap<i32, Category> = entity::prelude::Category::find()
            .filter(entity::category::Column::ServerId.eq(sid))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.category_id, Category::from_entity(c)))
            .collect();
        let tags: HashMap<i32, Tag> = entity::prelude::Tag::find()
            .filter(entity::tag::Column::ServerId.eq(sid))
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| (t.tag_id, Tag::from_entity(t)))
            .collect();
        let roles: HashMap<i64, Role> = entity::prelude::Role::find()
            .filter(entity::role::Column::ServerId.eq(sid))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| (r.role_id, Role::from_entity(r)))
            .collect();

        let mut tags_by_game: HashMap<i32, Vec<Tag>> = HashMap::new();
        for link in entity::prelude::GameTag::find()
            .filter(entity::game_tag::Column::GameId.is_in(game_ids.clone()))
            .all(self.db)
            .await?
        {
            if let Some(tag) = tags.get(&link.tag_id) {
                tags_by_game
                    .entry(link.game_id)
                    .or_default()
                    .push(tag.clone());
            }
        }
        let mut roles_by_game: HashMap<i32, Vec<Role>> = HashMap::new();
        for link in entity::prelude::GameRole::find()
            .filter(entity::game_role::Column::GameId.is_in(game_ids))
            .all(self.db)
            .await?
        {
            if let Some(role) = roles.get(&link.role_id) {
                roles_by_game
                    .entry(link.game_id)
                    .or_default()
                    .push(role.clone());
            }
        }

        Ok(games
            .into_iter()
            .map(|game| {
                let mut game_tags = tags_by_game.remove(&game.game_id).unwrap_or_default();
                game_tags.sort_by_key(|t| t.id);
                let mut game_roles = roles_by_game.remove(&game.game_id).unwrap_or_default();
                game_roles.sort_by_key(|r| r.id);
                GameSummary {
                    id: game.game_id,
                    name: game.name,
                    description: game.description,
                    category: game
                        .category_id
                        .and_then(|id| categories.get(&id).cloned()),
                    tags: game_tags,
                    roles: game_roles,
                }
            })
            .collect())
    }
}

/// An empty or whitespace-only description is stored as null.
fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.trim().is_empty())
}
