use super::*;

/// Tests renaming an author.
///
/// Expected: Ok(Some) with the new name stored
#[tokio::test]
async fn updates_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let mut context = LibraryContext::new(db.clone());
    let updated = AuthorRepository::new(&mut context)
        .update(
            author.id,
            UpdateAuthorParams {
                name: "Renamed".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, author.id);
    assert_eq!(updated.name, "Renamed");

    let stored = entity::prelude::Author::find_by_id(author.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Renamed");

    Ok(())
}

/// Tests updating an author that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut context = LibraryContext::new(db.clone());
    let result = AuthorRepository::new(&mut context)
        .update(
            3,
            UpdateAuthorParams {
                name: "Nobody".to_string(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
