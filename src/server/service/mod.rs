//! Business logic between controllers and repositories.
//!
//! Services validate incoming parameters and translate missing records into
//! `AppError::NotFound`; persistence is delegated to the repositories.

pub mod author;
pub mod book;
