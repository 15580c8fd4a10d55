//! Catalog and role-sync engine for a Discord companion application.
//!
//! Each Discord server gets an isolated catalog of games with tags,
//! categories, and mappings onto the server's Discord roles. The crate is the
//! storage and domain core; HTTP handlers and the bot event loop live in the
//! host application and call into it.
//!
//! ## Architecture
//!
//! - [`data`] - repositories, one per entity, owning all SeaORM queries
//! - [`service`] - operations that compose repositories or talk to Discord:
//!   aggregate snapshots, game validation, role synchronization
//! - [`model`] - domain types crossing the layer boundary; entity models stay
//!   inside [`data`]
//! - [`directory`] - trait over live Discord guild state, with a serenity
//!   implementation
//! - [`error`] - the engine-wide error type
//! - [`config`] / [`startup`] - environment loading, logging, database
//!   connection and migrations

pub mod config;
pub mod data;
pub mod directory;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
