//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author and one book written by that author, both with default values.
///
/// The book's denormalized `author` field is set to the author's name.
///
/// # Returns
/// - `Ok((author, book))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_book_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::author::Model, entity::book::Model), DbErr> {
    let author = crate::factory::author::create_author(db).await?;
    let book = crate::factory::book::BookFactory::new(db, author.id)
        .author(author.name.clone())
        .build()
        .await?;

    Ok((author, book))
}
