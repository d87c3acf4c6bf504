//! Design-time construction of a `LibraryContext`.
//!
//! Schema tooling runs outside the HTTP server, so it cannot rely on the runtime
//! configuration. `LibraryContextFactory` reads `appsettings.json` from a base directory
//! (the working directory by default) and connects with `ConnectionStrings.LibraryDb`.
//! Environment overrides are not consulted.

use std::path::PathBuf;

use crate::server::{config::Config, data::context::LibraryContext, error::AppError};

pub struct LibraryContextFactory {
    base_path: PathBuf,
}

impl LibraryContextFactory {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Factory rooted at the current working directory.
    pub fn from_current_dir() -> Result<Self, AppError> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Builds a context connected to the configured database.
    ///
    /// `args` are the tool's extra command-line arguments; they are logged and otherwise
    /// unused.
    ///
    /// # Returns
    /// - `Ok(LibraryContext)` - Connected context with nothing staged
    /// - `Err(AppError::ConfigErr)` - Settings file missing, malformed, or without
    ///   `ConnectionStrings.LibraryDb`
    /// - `Err(AppError::DbErr)` - The database could not be reached
    pub async fn create_db_context(&self, args: &[String]) -> Result<LibraryContext, AppError> {
        let config = Config::load(&self.base_path, None)?;

        tracing::debug!(
            base_path = %self.base_path.display(),
            ?args,
            "Creating design-time library context"
        );

        Ok(LibraryContext::connect(&config.database_url).await?)
    }
}
