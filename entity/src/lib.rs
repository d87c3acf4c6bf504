//! SeaORM entities for the library database.
//!
//! `book` rows reference `author` rows through `book.author_id`; the relation is
//! declared on both sides so either table can eager-load the other.

pub mod prelude;

pub mod author;
pub mod book;
