//! Error types shared across the catalog engine.
//!
//! Expected negative outcomes (duplicate names, blocked deletions, missing
//! rows on boolean operations) are modeled as typed results in
//! [`crate::model`], not as errors. `CatalogError` covers the cases where an
//! operation cannot produce a meaningful outcome at all.

pub mod config;

use sea_orm::DbErr;
use thiserror::Error;

use crate::error::config::ConfigError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// A referenced entity does not exist, or exists under a different server.
    #[error("{0}")]
    NotFound(String),
    /// Input rejected before any write was attempted.
    #[error("{0}")]
    Validation(String),
    /// The Discord API was unreachable or rejected the request.
    #[error("discord error: {0}")]
    Upstream(String),
}
