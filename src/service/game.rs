use sea_orm::DatabaseConnection;

use crate::data::GameRepository;
use crate::error::CatalogError;
use crate::model::game::{CreateGameParams, GameChanges, ReplaceGameParams};
use crate::util::thumbnail::{self, ThumbnailSource};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Game writes with input validation in front of the repository. Length and
/// thumbnail checks run before anything touches the database.
pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGameParams) -> Result<i32, CatalogError> {
        validate_name(&params.name)?;
        validate_description(params.description.as_deref())?;

        let game_id = GameRepository::new(self.db).create(params).await?;
        tracing::debug!(game_id, "game created");
        Ok(game_id)
    }

    pub async fn update(
        &self,
        game_id: i32,
        server_id: u64,
        changes: GameChanges,
    ) -> Result<bool, CatalogError> {
        if let Some(name) = &changes.name {
            validate_name(name)?;
        }
        if let Some(Some(description)) = &changes.description {
            validate_description(Some(description))?;
        }

        GameRepository::new(self.db)
            .update(game_id, server_id, changes)
            .await
    }

    pub async fn replace(
        &self,
        game_id: i32,
        server_id: u64,
        params: ReplaceGameParams,
    ) -> Result<bool, CatalogError> {
        validate_name(&params.name)?;
        validate_description(params.description.as_deref())?;

        GameRepository::new(self.db)
            .replace(game_id, server_id, params)
            .await
    }

    pub async fn delete(&self, game_id: i32, server_id: u64) -> Result<bool, CatalogError> {
        let deleted = GameRepository::new(self.db).delete(game_id, server_id).await?;
        if deleted {
            tracing::debug!(game_id, server_id, "game deleted");
        }
        Ok(deleted)
    }

    /// Decodes the thumbnail source, enforces the size cap, and stores the
    /// bytes. Returns `false` when the game does not exist in this server.
    pub async fn set_thumbnail(
        &self,
        game_id: i32,
        server_id: u64,
        source: ThumbnailSource,
    ) -> Result<bool, CatalogError> {
        let bytes = thumbnail::decode(source)?;
        GameRepository::new(self.db)
            .set_thumbnail(game_id, server_id, bytes)
            .await
    }
}

fn validate_name(name: &str) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::Validation("game name must not be empty".into()));
    }
    // Bounds are in characters, not bytes; multibyte names count per char.
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CatalogError::Validation(format!(
            "game name exceeds {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_description(description: Option<&str>) -> Result<(), CatalogError> {
    if let Some(description) = description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(CatalogError::Validation(format!(
                "game description exceeds {MAX_DESCRIPTION_LEN} characters"
            )));
        }
    }
    Ok(())
}
