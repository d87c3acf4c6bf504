//! Application state shared across all request handlers.
//!
//! `AppState` only carries the database connection pool. Handlers never touch it directly:
//! they ask for a `LibraryContext`, which the extractor below builds fresh for every request
//! so staged changes are never shared between requests.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use sea_orm::DatabaseConnection;

use crate::server::data::context::LibraryContext;

/// Application state containing shared resources.
///
/// Cloned for each request; `DatabaseConnection` is a pool, so clones share it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FromRequestParts<AppState> for LibraryContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(LibraryContext::new(state.db.clone()))
    }
}
