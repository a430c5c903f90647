//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let link = factory::account_link::create_link(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::account_link::AccountLinkFactory;
//!
//! let link = AccountLinkFactory::new(&db)
//!     .ckey("shadowkoala")
//!     .token("secret-token")
//!     .valid(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `account_link` - Create account link entities
//! - `helpers` - Shared utilities such as unique ID generation

pub mod account_link;
pub mod helpers;

// Re-export commonly used factory functions for concise usage
pub use account_link::create_link;
