use super::*;

/// Tests deleting an existing book.
///
/// Expected: Ok(true) and the row removed
#[tokio::test]
async fn deletes_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, book) = factory::create_book_with_author(db).await?;

    let mut context = LibraryContext::new(db.clone());
    let deleted = BookRepository::new(&mut context).delete(book.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Book::find_by_id(book.id)
        .one(db)
        .await?
        .is_none());
    // The author is untouched
    assert!(entity::prelude::Author::find_by_id(author.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a book that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut context = LibraryContext::new(db.clone());
    let deleted = BookRepository::new(&mut context).delete(1).await?;

    assert!(!deleted);

    Ok(())
}
