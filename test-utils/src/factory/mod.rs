//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation. Factories insert straight into the database,
//! bypassing the application's validation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::create_author(&db).await?;
//! let book = factory::book::BookFactory::new(&db, author.id)
//!     .title("Dune")
//!     .isbn("9780441013593")
//!     .build()
//!     .await?;
//! ```

pub mod author;
pub mod book;
pub mod helpers;

pub use author::create_author;
pub use book::create_book;
pub use helpers::create_book_with_author;
