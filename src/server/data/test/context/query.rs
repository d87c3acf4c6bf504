use super::*;

/// Tests that books are returned without navigation unless requested.
///
/// Expected: Ok with author `None` for `BookInclude::None` and `Some` for `AuthorDetails`
#[tokio::test]
async fn loads_author_details_only_when_included() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, book) = factory::create_book_with_author(db).await?;
    let context = LibraryContext::new(db.clone());

    let plain = context.query_books(Condition::all(), BookInclude::None).await?;
    assert_eq!(plain.len(), 1);
    assert_eq!(plain[0].0, book);
    assert!(plain[0].1.is_none());

    let included = context
        .query_books(Condition::all(), BookInclude::AuthorDetails)
        .await?;
    assert_eq!(included.len(), 1);
    assert_eq!(included[0].1.as_ref(), Some(&author));

    Ok(())
}

/// Tests that authors carry their books only when `AuthorInclude::Books` is requested.
///
/// Expected: Ok with books grouped under the owning author
#[tokio::test]
async fn loads_books_only_when_included() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_author(db).await?;
    let second = factory::create_author(db).await?;
    factory::create_book(db, first.id).await?;
    factory::create_book(db, first.id).await?;

    let context = LibraryContext::new(db.clone());

    let plain = context
        .query_authors(Condition::all(), AuthorInclude::None)
        .await?;
    assert_eq!(plain.len(), 2);
    assert!(plain.iter().all(|(_, books)| books.is_empty()));

    let included = context
        .query_authors(Condition::all(), AuthorInclude::Books)
        .await?;
    assert_eq!(included.len(), 2);
    assert_eq!(included[0].0.id, first.id);
    assert_eq!(included[0].1.len(), 2);
    assert_eq!(included[1].0.id, second.id);
    assert!(included[1].1.is_empty());

    Ok(())
}

/// Tests that the filter condition restricts results.
///
/// Expected: Ok with only the matching book
#[tokio::test]
async fn applies_filter_condition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    factory::create_book(db, author.id).await?;
    let wanted = factory::book::BookFactory::new(db, author.id)
        .title("Wanted")
        .build()
        .await?;

    let context = LibraryContext::new(db.clone());
    let books = context
        .query_books(
            Condition::all().add(entity::book::Column::Title.eq("Wanted")),
            BookInclude::None,
        )
        .await?;

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].0.id, wanted.id);

    Ok(())
}

/// Tests finding rows by primary key.
///
/// Expected: Ok(Some) for existing ids, Ok(None) otherwise
#[tokio::test]
async fn finds_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, book) = factory::create_book_with_author(db).await?;
    let context = LibraryContext::new(db.clone());

    assert_eq!(context.find_book(book.id).await?, Some(book));
    assert_eq!(context.find_author(author.id).await?, Some(author));
    assert!(context.find_book(999).await?.is_none());
    assert!(context.find_author(999).await?.is_none());

    Ok(())
}
