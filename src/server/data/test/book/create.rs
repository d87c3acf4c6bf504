use super::*;

/// Tests creating a book for an existing author.
///
/// Expected: Ok with a generated id and every field stored as given
#[tokio::test]
async fn creates_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let mut context = LibraryContext::new(db.clone());
    let book = BookRepository::new(&mut context)
        .create(CreateBookParams {
            title: "X".to_string(),
            author: "Jane Doe".to_string(),
            publication_date: date(2020, 5, 1),
            isbn: "123".to_string(),
            author_id: author.id,
        })
        .await?;

    assert!(book.id > 0);
    assert_eq!(book.title, "X");
    assert_eq!(book.author_id, author.id);
    assert!(book.author_details.is_none());

    let stored = entity::prelude::Book::find_by_id(book.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.author, "Jane Doe");
    assert_eq!(stored.publication_date, date(2020, 5, 1));
    assert_eq!(stored.isbn, "123");

    Ok(())
}

/// Tests that the foreign key rejects a book for a missing author.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut context = LibraryContext::new(db.clone());
    let result = BookRepository::new(&mut context)
        .create(CreateBookParams {
            title: "X".to_string(),
            author: "Jane Doe".to_string(),
            publication_date: date(2020, 5, 1),
            isbn: "123".to_string(),
            author_id: 42,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
