use crate::data::category::CategoryRepository;
use crate::error::CatalogError;
use crate::model::category::CategoryDeletion;
use crate::model::Inserted;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod assign_to_game;
mod create;
