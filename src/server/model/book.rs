//! Book domain models and parameters.

use chrono::NaiveDateTime;

use crate::{
    model::book::{BookDto, CreateBookDto, UpdateBookDto},
    server::model::author::Author,
};

/// Message returned when a book payload is missing a required text field.
pub const BOOK_REQUIRED_FIELDS_MESSAGE: &str = "Title, Author, and ISBN are required.";

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub publication_date: NaiveDateTime,
    pub isbn: String,
    pub author_id: i32,
    /// Referenced author, present only when eager-loaded.
    pub author_details: Option<Author>,
}

impl Book {
    /// Converts an entity model, and the optionally loaded author, to the domain model.
    pub fn from_entity(
        entity: entity::book::Model,
        author: Option<entity::author::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author: entity.author,
            publication_date: entity.publication_date,
            isbn: entity.isbn,
            author_id: entity.author_id,
            author_details: author.map(|a| Author::from_entity(a, Vec::new())),
        }
    }

    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            title: self.title,
            author: self.author,
            publication_date: self.publication_date,
            isbn: self.isbn,
            author_id: self.author_id,
            author_details: self.author_details.map(Author::into_dto),
        }
    }
}

/// Parameters for creating a new book.
#[derive(Debug, Clone)]
pub struct CreateBookParams {
    pub title: String,
    pub author: String,
    pub publication_date: NaiveDateTime,
    pub isbn: String,
    pub author_id: i32,
}

impl CreateBookParams {
    /// Title, author name and ISBN must all be non-empty.
    pub fn has_required_fields(&self) -> bool {
        !self.title.is_empty() && !self.author.is_empty() && !self.isbn.is_empty()
    }
}

impl From<CreateBookDto> for CreateBookParams {
    fn from(dto: CreateBookDto) -> Self {
        Self {
            title: dto.title,
            author: dto.author,
            publication_date: dto.publication_date,
            isbn: dto.isbn,
            author_id: dto.author_id,
        }
    }
}

/// Parameters replacing every mutable field of an existing book.
///
/// `author_id` is not part of the update; a book stays attached to the author it was
/// created for.
#[derive(Debug, Clone)]
pub struct UpdateBookParams {
    pub title: String,
    pub author: String,
    pub publication_date: NaiveDateTime,
    pub isbn: String,
}

impl UpdateBookParams {
    /// Title, author name and ISBN must all be non-empty.
    pub fn has_required_fields(&self) -> bool {
        !self.title.is_empty() && !self.author.is_empty() && !self.isbn.is_empty()
    }
}

impl From<UpdateBookDto> for UpdateBookParams {
    fn from(dto: UpdateBookDto) -> Self {
        Self {
            title: dto.title,
            author: dto.author,
            publication_date: dto.publication_date,
            isbn: dto.isbn,
        }
    }
}
