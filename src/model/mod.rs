//! JSON request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod author;
pub mod book;
