use crate::data::role::RoleRepository;
use crate::error::CatalogError;
use crate::model::role::{RoleRemovalMode, RoleRemovalOutcome};
use crate::model::Inserted;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod map_to_game;
mod set_role_category;
