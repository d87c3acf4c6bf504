use super::*;

/// Tests creating an author.
///
/// Expected: Ok with a generated id and no books
#[tokio::test]
async fn creates_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut context = LibraryContext::new(db.clone());
    let author = AuthorRepository::new(&mut context)
        .create(CreateAuthorParams {
            name: "Jane Doe".to_string(),
        })
        .await?;

    assert_eq!(author.id, 1);
    assert_eq!(author.name, "Jane Doe");
    assert!(author.books.is_empty());

    let stored = entity::prelude::Author::find_by_id(author.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Jane Doe");

    Ok(())
}
