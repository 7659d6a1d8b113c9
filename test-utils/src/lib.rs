//! Library Services Test Utils
//!
//! Provides shared testing utilities for the book, member and order services. This crate offers
//! a builder pattern for creating test contexts with in-memory SQLite databases holding only the
//! tables a test needs, plus factories for inserting records with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Record factories for books, members and orders
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Book;
//!
//! #[tokio::test]
//! async fn test_book_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Book)
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
