use super::*;

/// Tests listing books with their authors eager-loaded.
///
/// Expected: Ok with every book and its `author_details` populated
#[tokio::test]
async fn gets_all_books_with_author_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first_author, first_book) = factory::create_book_with_author(db).await?;
    let (second_author, second_book) = factory::create_book_with_author(db).await?;

    let mut context = LibraryContext::new(db.clone());
    let books = BookRepository::new(&mut context).get_all().await?;

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, first_book.id);
    assert_eq!(
        books[0].author_details.as_ref().map(|a| a.name.as_str()),
        Some(first_author.name.as_str())
    );
    assert_eq!(books[1].id, second_book.id);
    assert_eq!(
        books[1].author_details.as_ref().map(|a| a.id),
        Some(second_author.id)
    );

    Ok(())
}

/// Tests listing books on an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn gets_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut context = LibraryContext::new(db.clone());
    let books = BookRepository::new(&mut context).get_all().await?;

    assert!(books.is_empty());

    Ok(())
}

/// Tests getting a single book by id.
///
/// Expected: Ok(Some) with author details, Ok(None) for an unknown id
#[tokio::test]
async fn gets_book_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, book) = factory::create_book_with_author(db).await?;

    let mut context = LibraryContext::new(db.clone());
    let repo = BookRepository::new(&mut context);

    let found = repo.get_by_id(book.id).await?.unwrap();
    assert_eq!(found.title, book.title);
    assert_eq!(found.author_details.map(|a| a.id), Some(author.id));

    assert!(repo.get_by_id(book.id + 100).await?.is_none());

    Ok(())
}
