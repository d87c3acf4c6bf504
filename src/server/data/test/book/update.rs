use super::*;

/// Tests that an update replaces every mutable field.
///
/// Expected: Ok(Some) with title, author, publication date and ISBN replaced
#[tokio::test]
async fn replaces_all_mutable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, book) = factory::create_book_with_author(db).await?;

    let mut context = LibraryContext::new(db.clone());
    let updated = BookRepository::new(&mut context)
        .update(
            book.id,
            UpdateBookParams {
                title: "New Title".to_string(),
                author: "New Author".to_string(),
                publication_date: date(1999, 12, 31),
                isbn: "999".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, book.id);
    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.author, "New Author");
    assert_eq!(updated.publication_date, date(1999, 12, 31));
    assert_eq!(updated.isbn, "999");
    assert_eq!(updated.author_id, author.id);

    let stored = entity::prelude::Book::find_by_id(book.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, "New Title");
    assert_eq!(stored.isbn, "999");

    Ok(())
}

/// Tests updating a book that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut context = LibraryContext::new(db.clone());
    let result = BookRepository::new(&mut context)
        .update(
            7,
            UpdateBookParams {
                title: "T".to_string(),
                author: "A".to_string(),
                publication_date: date(2000, 1, 1),
                isbn: "I".to_string(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
