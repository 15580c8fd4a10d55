//! Gamedex Test Utils
//!
//! Shared testing utilities for building unit and integration tests against the
//! catalog engine. Offers a builder pattern for creating test contexts backed by
//! in-memory SQLite databases, plus factories for seeding catalog entities.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder for configuring the test database schema
//! - **TestContext**: test environment holding the database connection
//! - **TestError**: errors that can occur during test setup
//! - **factory**: per-entity helpers for seeding rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_catalog_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_catalog_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
