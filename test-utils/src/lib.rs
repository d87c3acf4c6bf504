//! Library Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the library
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for inserting authors and books with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_book_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_library_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (author, book) = factory::create_book_with_author(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
