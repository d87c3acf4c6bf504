//! Domain models and operation parameter types.
//!
//! Repositories convert entity rows into these models at the data boundary; controllers
//! convert them into DTOs with `into_dto`.

pub mod author;
pub mod book;
