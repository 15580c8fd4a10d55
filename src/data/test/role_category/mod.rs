use crate::data::role::RoleRepository;
use crate::data::role_category::RoleCategoryRepository;
use crate::error::CatalogError;
use crate::model::role_category::RoleCategoryDeletion;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
