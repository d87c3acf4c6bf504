use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, data::context::LibraryContext, error::AppError,
    factory::LibraryContextFactory,
};

/// Schema operation requested through `library migrate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MigrateAction {
    /// Apply all pending migrations.
    #[default]
    Up,
    /// Roll back the most recent migration.
    Down,
    /// Drop every table and reapply all migrations.
    Fresh,
    /// Print which migrations are applied.
    Status,
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the schema is up to date before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let db = LibraryContext::open_pool(&config.database_url).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Runs a schema operation against the database named in `appsettings.json`.
///
/// Uses `LibraryContextFactory` rather than the runtime configuration, so `LIBRARY_DB` has
/// no effect here.
pub async fn migrate(action: MigrateAction, args: &[String]) -> Result<(), AppError> {
    let context = LibraryContextFactory::from_current_dir()?
        .create_db_context(args)
        .await?;
    let db = context.connection();

    match action {
        MigrateAction::Up => Migrator::up(db, None).await?,
        MigrateAction::Down => Migrator::down(db, Some(1)).await?,
        MigrateAction::Fresh => Migrator::fresh(db).await?,
        MigrateAction::Status => Migrator::status(db).await?,
    }

    tracing::info!(?action, "Migration finished");

    Ok(())
}

/// Resolves when the process receives Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
