//! Repository layer: all database access for the catalog.
//!
//! Each repository wraps a borrowed [`sea_orm::DatabaseConnection`] and owns
//! the queries for one entity. Every query that touches a row by ID also
//! filters on the owning server, so a caller can never read or mutate another
//! server's rows by guessing IDs. SeaORM entity models stay in this layer;
//! methods return the domain types in [`crate::model`].

pub mod category;
pub mod game;
pub mod role;
pub mod role_category;
pub mod server;
pub mod tag;


pub use category::CategoryRepository;
pub use game::GameRepository;
pub use role::RoleRepository;
pub use role_category::RoleCategoryRepository;
pub use server::ServerRepository;
pub use tag::TagRepository;
