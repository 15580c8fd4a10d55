use crate::data::game::GameRepository;
use crate::error::CatalogError;
use crate::model::game::{CreateGameParams, GameChanges, ReplaceGameParams};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod thumbnail;

fn params(server_id: i64, name: &str) -> CreateGameParams {
    CreateGameParams {
        server_id: server_id as u64,
        name: name.to_string(),
        description: None,
        category_id: None,
    }
}
