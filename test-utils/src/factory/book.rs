//! Book factory for creating test book entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// The referenced author must already exist; SQLite enforces the foreign key.
///
/// # Example
///
/// ```rust,ignore
/// let book = BookFactory::new(&db, author.id)
///     .title("The Dispossessed")
///     .isbn("9780060512750")
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    author: String,
    publication_date: chrono::NaiveDateTime,
    isbn: String,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Book {n}"`
    /// - author: `"Author {n}"`
    /// - publication_date: `2001-01-01T00:00:00`
    /// - isbn: `"978-{n}"`
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Book {}", id),
            author: format!("Author {}", id),
            publication_date: NaiveDate::from_ymd_opt(2001, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap_or_default(),
            isbn: format!("978-{}", id),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn publication_date(mut self, publication_date: chrono::NaiveDateTime) -> Self {
        self.publication_date = publication_date;
        self
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    /// Builds and inserts the book entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - Created book entity
    /// - `Err(DbErr)` - Database error during insert, including a missing author
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            title: ActiveValue::Set(self.title),
            author: ActiveValue::Set(self.author),
            publication_date: ActiveValue::Set(self.publication_date),
            isbn: ActiveValue::Set(self.isbn),
            author_id: ActiveValue::Set(self.author_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values for the given author.
///
/// Shorthand for `BookFactory::new(db, author_id).build().await`.
pub async fn create_book(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db, author_id).build().await
}
