use super::*;

/// Tests deleting an author together with their books.
///
/// Expected: Ok(true), author and books removed
#[tokio::test]
async fn deletes_author_and_books() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _) = factory::create_book_with_author(db).await?;

    let mut context = LibraryContext::new(db.clone());
    let deleted = AuthorRepository::new(&mut context).delete(author.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Author::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Book::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting an author that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut context = LibraryContext::new(db.clone());
    let deleted = AuthorRepository::new(&mut context).delete(5).await?;

    assert!(!deleted);

    Ok(())
}
