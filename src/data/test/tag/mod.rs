use crate::data::tag::TagRepository;
use crate::error::CatalogError;
use crate::model::Inserted;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod remove_from_game;

/// Tag IDs currently linked to a game.
async fn linked_tag_ids(
    db: &sea_orm::DatabaseConnection,
    game_id: i32,
) -> Result<Vec<i32>, CatalogError> {
    let mut ids: Vec<i32> = entity::prelude::GameTag::find()
        .filter(entity::game_tag::Column::GameId.eq(game_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.tag_id)
        .collect();
    ids.sort_unstable();
    Ok(ids)
}
