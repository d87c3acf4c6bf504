use super::*;

/// Tests listing authors with their books eager-loaded.
///
/// Expected: Ok with each author's books attached
#[tokio::test]
async fn gets_all_authors_with_books() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, book) = factory::create_book_with_author(db).await?;
    let lonely = factory::create_author(db).await?;

    let mut context = LibraryContext::new(db.clone());
    let authors = AuthorRepository::new(&mut context).get_all().await?;

    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].id, author.id);
    assert_eq!(authors[0].books.len(), 1);
    assert_eq!(authors[0].books[0].id, book.id);
    assert!(authors[0].books[0].author_details.is_none());
    assert_eq!(authors[1].id, lonely.id);
    assert!(authors[1].books.is_empty());

    Ok(())
}

/// Tests getting a single author by id.
///
/// Expected: Ok(Some) with books, Ok(None) for an unknown id
#[tokio::test]
async fn gets_author_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    factory::create_book(db, author.id).await?;
    factory::create_book(db, author.id).await?;

    let mut context = LibraryContext::new(db.clone());
    let repo = AuthorRepository::new(&mut context);

    let found = repo.get_by_id(author.id).await?.unwrap();
    assert_eq!(found.name, author.name);
    assert_eq!(found.books.len(), 2);

    assert!(repo.get_by_id(author.id + 1).await?.is_none());
    assert!(repo.exists(author.id).await?);
    assert!(!repo.exists(author.id + 1).await?);

    Ok(())
}
