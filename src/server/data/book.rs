//! Book data repository.

use sea_orm::{ActiveValue, ColumnTrait, Condition, DbErr};

use crate::server::{
    data::context::{BookInclude, LibraryContext, SavedChange},
    model::book::{Book, CreateBookParams, UpdateBookParams},
};

/// Repository providing book operations over a per-request `LibraryContext`.
pub struct BookRepository<'a> {
    context: &'a mut LibraryContext,
}

impl<'a> BookRepository<'a> {
    pub fn new(context: &'a mut LibraryContext) -> Self {
        Self { context }
    }

    /// Gets every book with its author eager-loaded, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Book>, DbErr> {
        let books = self
            .context
            .query_books(Condition::all(), BookInclude::AuthorDetails)
            .await?;

        Ok(books
            .into_iter()
            .map(|(book, author)| Book::from_entity(book, author))
            .collect())
    }

    /// Gets a book by ID with its author eager-loaded.
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - The book exists
    /// - `Ok(None)` - No book with that ID
    /// - `Err(DbErr)` - Database error during the query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Book>, DbErr> {
        let books = self
            .context
            .query_books(
                Condition::all().add(entity::book::Column::Id.eq(id)),
                BookInclude::AuthorDetails,
            )
            .await?;

        Ok(books
            .into_iter()
            .next()
            .map(|(book, author)| Book::from_entity(book, author)))
    }

    /// Inserts a new book and returns it with its generated ID.
    ///
    /// The referenced author is not loaded on the returned model.
    pub async fn create(&mut self, params: CreateBookParams) -> Result<Book, DbErr> {
        self.context.add(entity::book::ActiveModel {
            title: ActiveValue::Set(params.title),
            author: ActiveValue::Set(params.author),
            publication_date: ActiveValue::Set(params.publication_date),
            isbn: ActiveValue::Set(params.isbn),
            author_id: ActiveValue::Set(params.author_id),
            ..Default::default()
        });

        let saved = self.context.save_changes().await?;

        Ok(Book::from_entity(saved_book(saved)?, None))
    }

    /// Overwrites title, author name, publication date and ISBN of an existing book.
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - The book as stored after the update
    /// - `Ok(None)` - No book with that ID
    /// - `Err(DbErr)` - Database error during the update
    pub async fn update(&mut self, id: i32, params: UpdateBookParams) -> Result<Option<Book>, DbErr> {
        let Some(book) = self.context.find_book(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::book::ActiveModel = book.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.author = ActiveValue::Set(params.author);
        active_model.publication_date = ActiveValue::Set(params.publication_date);
        active_model.isbn = ActiveValue::Set(params.isbn);

        self.context.update(active_model);
        let saved = self.context.save_changes().await?;

        Ok(Some(Book::from_entity(saved_book(saved)?, None)))
    }

    /// Deletes a book by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - The book existed and was deleted
    /// - `Ok(false)` - No book with that ID
    /// - `Err(DbErr)` - Database error during the delete
    pub async fn delete(&mut self, id: i32) -> Result<bool, DbErr> {
        let Some(book) = self.context.find_book(id).await? else {
            return Ok(false);
        };

        self.context.remove(book);
        self.context.save_changes().await?;

        Ok(true)
    }
}

fn saved_book(saved: Vec<SavedChange>) -> Result<entity::book::Model, DbErr> {
    saved
        .into_iter()
        .find_map(|change| match change {
            SavedChange::Book(model) => Some(model),
            _ => None,
        })
        .ok_or_else(|| DbErr::Custom("Book row was not returned after save".to_string()))
}
