//! Database repository layer.
//!
//! `LibraryContext` is the unit-of-work every repository works through. Repositories stage
//! changes on the context, commit them with `save_changes`, and convert entity rows into
//! domain models so the layers above never handle SeaORM types directly.

pub mod author;
pub mod book;
pub mod context;
