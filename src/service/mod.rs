//! Business logic composed on top of the repository layer.

pub mod catalog;
pub mod game;
pub mod sync;


pub use catalog::CatalogService;
pub use game::GameService;
pub use sync::RoleSyncService;
