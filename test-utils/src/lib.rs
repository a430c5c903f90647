//! Ckeylink Test Utils
//!
//! Shared testing utilities for the account-linking bot. Offers a builder
//! pattern for creating test contexts with in-memory SQLite databases and
//! customizable table schemas, plus factories for link records.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::AccountLink;
//!
//! #[tokio::test]
//! async fn test_link_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(AccountLink)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
