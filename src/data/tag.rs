use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, SqlErr,
};

use crate::data::server::ServerRepository;
use crate::error::CatalogError;
use crate::model::tag::Tag;
use crate::model::Inserted;

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tag. Names are unique per server; a duplicate is reported as
    /// [`Inserted::AlreadyExists`].
    pub async fn create(&self, server_id: u64, name: &str) -> Result<Inserted<i32>, CatalogError> {
        ServerRepository::new(self.db).require(server_id).await?;

        let result = entity::tag::ActiveModel {
            server_id: ActiveValue::Set(server_id as i64),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(tag) => Ok(Inserted::Created(tag.tag_id)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(Inserted::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list(&self, server_id: u64) -> Result<Vec<Tag>, CatalogError> {
        let tags = entity::prelude::Tag::find()
            .filter(entity::tag::Column::ServerId.eq(server_id as i64))
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;
        Ok(tags.into_iter().map(Tag::from_entity).collect())
    }

    /// Deletes a tag and its game links. Returns `false` when the tag does
    /// not exist in this server.
    pub async fn delete(&self, tag_id: i32, server_id: u64) -> Result<bool, CatalogError> {
        let exists = entity::prelude::Tag::find_by_id(tag_id)
            .filter(entity::tag::Column::ServerId.eq(server_id as i64))
            .count(self.db)
            .await?;
        if exists == 0 {
            return Ok(false);
        }

        entity::prelude::GameTag::delete_many()
            .filter(entity::game_tag::Column::TagId.eq(tag_id))
            .exec(self.db)
            .await?;
        entity::prelude::Tag::delete_many()
            .filter(entity::tag::Column::TagId.eq(tag_id))
            .filter(entity::tag::Column::ServerId.eq(server_id as i64))
            .exec(self.db)
            .await?;

        Ok(true)
    }

    /// Attaches tags to a game by name, creating any tag that does not exist
    /// yet. Already-attached tags are left alone.
    pub async fn add_to_game(
        &self,
        game_id: i32,
        server_id: u64,
        names: &[String],
    ) -> Result<(), CatalogError> {
        self.require_game(game_id, server_id).await?;
        for name in names {
            let tag_id = self.find_or_create(server_id, name).await?;
            self.link(game_id, tag_id).await?;
        }
        Ok(())
    }

    /// Attaches existing tags to a game by ID. Unlike the by-name variant,
    /// an unknown tag is an error, not a cue to create one.
    pub async fn add_to_game_by_ids(
        &self,
        game_id: i32,
        server_id: u64,
        tag_ids: &[i32],
    ) -> Result<(), CatalogError> {
        self.require_game(game_id, server_id).await?;
        for &tag_id in tag_ids {
            let count = entity::prelude::Tag::find_by_id(tag_id)
                .filter(entity::tag::Column::ServerId.eq(server_id as i64))
                .count(self.db)
                .await?;
            if count == 0 {
                return Err(CatalogError::NotFound(format!(
                    "tag {tag_id} does not exist in this server"
                )));
            }
            self.link(game_id, tag_id).await?;
        }
        Ok(())
    }

    /// Detaches a tag from a game by name. Returns `false` when the game,
    /// the tag, or the link is absent. The tag row itself stays.
    pub async fn remove_from_game(
        &self,
        game_id: i32,
        server_id: u64,
        name: &str,
    ) -> Result<bool, CatalogError> {
        let sid = server_id as i64;
        let game_exists = entity::prelude::Game::find_by_id(game_id)
            .filter(entity::game::Column::ServerId.eq(sid))
            .count(self.db)
            .await?;
        if game_exists == 0 {
            return Ok(false);
        }
        let Some(tag) = entity::prelude::Tag::find()
            .filter(entity::tag::Column::ServerId.eq(sid))
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let result = entity::prelude::GameTag::delete_many()
            .filter(entity::game_tag::Column::GameId.eq(game_id))
            .filter(entity::game_tag::Column::TagId.eq(tag.tag_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn require_game(&self, game_id: i32, server_id: u64) -> Result<(), CatalogError> {
        let count = entity::prelude::Game::find_by_id(game_id)
            .filter(entity::game::Column::ServerId.eq(server_id as i64))
            .count(self.db)
            .await?;
        if count == 0 {
            return Err(CatalogError::NotFound(format!(
                "game {game_id} does not exist in this server"
            )));
        }
        Ok(())
    }

    async fn find_or_create(&self, server_id: u64, name: &str) -> Result<i32, CatalogError> {
        let sid = server_id as i64;
        let existing = entity::prelude::Tag::find()
            .filter(entity::tag::Column::ServerId.eq(sid))
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await?;
        if let Some(tag) = existing {
            return Ok(tag.tag_id);
        }

        match self.create(server_id, name).await? {
            Inserted::Created(tag_id) => Ok(tag_id),
            // Lost a race with a concurrent insert of the same name.
            Inserted::AlreadyExists => {
                let tag = entity::prelude::Tag::find()
                    .filter(entity::tag::Column::ServerId.eq(sid))
                    .filter(entity::tag::Column::Name.eq(name))
                    .one(self.db)
                    .await?
                    .ok_or_else(|| {
                        CatalogError::NotFound(format!("tag '{name}' vanished during creation"))
                    })?;
                Ok(tag.tag_id)
            }
        }
    }

    async fn link(&self, game_id: i32, tag_id: i32) -> Result<(), CatalogError> {
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
        Ok(())
    }
}
