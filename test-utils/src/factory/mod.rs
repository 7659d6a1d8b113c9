//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test records with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
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
//!     let book = factory::book::create_book(&db).await?;
//!     let member = factory::member::create_member(&db).await?;
//!
//!     // Orders reference records by id only, they may live in another database
//!     let order = factory::order::create_order(&db, member.id, book.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let book = factory::book::BookFactory::new(&db)
//!     .title("Dune")
//!     .author("Herbert")
//!     .build()
//!     .await?;
//! ```

pub mod book;
pub mod helpers;
pub mod member;
pub mod order;

pub use book::create_book;
pub use member::create_member;
pub use order::create_order;
