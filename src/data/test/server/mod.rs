use crate::data::server::ServerRepository;
use crate::error::CatalogError;
use crate::model::Inserted;
use test_utils::{builder::TestBuilder, factory};
