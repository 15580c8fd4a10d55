//! Factory methods for creating test data.
//!
//! Each catalog entity has a factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle foreign-key dependencies so tests stay concise.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let server = factory::server::create_server(&db).await?;
//! let game = factory::game::create_game(&db, server.server_id).await?;
//! let tag = factory::tag::create_tag(&db, server.server_id).await?;
//! ```

pub mod category;
pub mod game;
pub mod helpers;
pub mod role;
pub mod role_category;
pub mod server;
pub mod tag;

// Re-export commonly used factory functions for concise usage
pub use category::create_category;
pub use game::create_game;
pub use role::{create_role, create_role_with_id};
pub use role_category::create_role_category;
pub use server::{create_server, create_server_with_id};
pub use tag::{create_tag, create_tag_named};
