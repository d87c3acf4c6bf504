//! Author factory for creating test author entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test authors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let author = AuthorFactory::new(&db).name("Ursula K. Le Guin").build().await?;
/// ```
pub struct AuthorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> AuthorFactory<'a> {
    /// Creates a new AuthorFactory with a unique default name of `"Author {n}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Author {}", next_id()),
        }
    }

    /// Sets the name for the author.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the author entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::author::Model)` - Created author entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::author::Model, DbErr> {
        entity::author::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an author with default values.
///
/// Shorthand for `AuthorFactory::new(db).build().await`.
pub async fn create_author(db: &DatabaseConnection) -> Result<entity::author::Model, DbErr> {
    AuthorFactory::new(db).build().await
}
