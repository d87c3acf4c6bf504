use crate::server::{
    data::{author::AuthorRepository, book::BookRepository, context::LibraryContext},
    error::AppError,
    model::book::{Book, CreateBookParams, UpdateBookParams, BOOK_REQUIRED_FIELDS_MESSAGE},
};

pub const BOOK_NOT_FOUND_MESSAGE: &str = "Book not found";

/// Message returned when a new book references an author id with no row.
pub const BOOK_AUTHOR_MISSING_MESSAGE: &str = "Author does not exist.";

pub struct BookService {
    context: LibraryContext,
}

impl BookService {
    pub fn new(context: LibraryContext) -> Self {
        Self { context }
    }

    /// Gets every book with its author details.
    pub async fn get_all(&mut self) -> Result<Vec<Book>, AppError> {
        Ok(BookRepository::new(&mut self.context).get_all().await?)
    }

    /// Gets a book by ID with its author details.
    ///
    /// # Returns
    /// - `Ok(Book)` - The requested book
    /// - `Err(AppError::NotFound)` - No book with that ID
    pub async fn get_by_id(&mut self, id: i32) -> Result<Book, AppError> {
        BookRepository::new(&mut self.context)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND_MESSAGE.to_string()))
    }

    /// Creates a book after validating required fields and the referenced author.
    ///
    /// # Returns
    /// - `Ok(Book)` - The created book with its generated ID
    /// - `Err(AppError::BadRequest)` - A required field is empty or the author does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&mut self, params: CreateBookParams) -> Result<Book, AppError> {
        if !params.has_required_fields() {
            return Err(AppError::BadRequest(
                BOOK_REQUIRED_FIELDS_MESSAGE.to_string(),
            ));
        }

        if !AuthorRepository::new(&mut self.context)
            .exists(params.author_id)
            .await?
        {
            return Err(AppError::BadRequest(BOOK_AUTHOR_MISSING_MESSAGE.to_string()));
        }

        let book = BookRepository::new(&mut self.context).create(params).await?;

        tracing::info!(book_id = book.id, author_id = book.author_id, "book created");

        Ok(book)
    }

    /// Replaces the mutable fields of a book.
    ///
    /// Fields are validated before the book is looked up, so an invalid payload for an
    /// unknown ID is reported as 400 rather than 404.
    ///
    /// # Returns
    /// - `Ok(())` - The book was updated
    /// - `Err(AppError::BadRequest)` - A required field is empty
    /// - `Err(AppError::NotFound)` - No book with that ID
    pub async fn update(&mut self, id: i32, params: UpdateBookParams) -> Result<(), AppError> {
        if !params.has_required_fields() {
            return Err(AppError::BadRequest(
                BOOK_REQUIRED_FIELDS_MESSAGE.to_string(),
            ));
        }

        BookRepository::new(&mut self.context)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND_MESSAGE.to_string()))?;

        tracing::info!(book_id = id, "book updated");

        Ok(())
    }

    /// Deletes a book.
    ///
    /// # Returns
    /// - `Ok(())` - The book was deleted
    /// - `Err(AppError::NotFound)` - No book with that ID
    pub async fn delete(&mut self, id: i32) -> Result<(), AppError> {
        if !BookRepository::new(&mut self.context).delete(id).await? {
            return Err(AppError::NotFound(BOOK_NOT_FOUND_MESSAGE.to_string()));
        }

        tracing::info!(book_id = id, "book deleted");

        Ok(())
    }
}
