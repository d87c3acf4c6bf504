//! Author domain models and parameters.

use crate::{
    model::author::{AuthorDto, CreateAuthorDto, UpdateAuthorDto},
    server::model::book::Book,
};

/// Message returned when an author payload has an empty name.
pub const AUTHOR_REQUIRED_FIELDS_MESSAGE: &str = "Name is required.";

#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i32,
    pub name: String,
    /// Books referencing this author, empty unless eager-loaded.
    pub books: Vec<Book>,
}

impl Author {
    /// Converts an entity model and its loaded books to the domain model.
    ///
    /// Nested books never carry `author_details` back to this author.
    pub fn from_entity(entity: entity::author::Model, books: Vec<entity::book::Model>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            books: books
                .into_iter()
                .map(|book| Book::from_entity(book, None))
                .collect(),
        }
    }

    pub fn into_dto(self) -> AuthorDto {
        AuthorDto {
            id: self.id,
            name: self.name,
            books: self.books.into_iter().map(Book::into_dto).collect(),
        }
    }
}

/// Parameters for creating a new author.
#[derive(Debug, Clone)]
pub struct CreateAuthorParams {
    pub name: String,
}

impl From<CreateAuthorDto> for CreateAuthorParams {
    fn from(dto: CreateAuthorDto) -> Self {
        Self { name: dto.name }
    }
}

/// Parameters replacing the mutable fields of an existing author.
#[derive(Debug, Clone)]
pub struct UpdateAuthorParams {
    pub name: String,
}

impl From<UpdateAuthorDto> for UpdateAuthorParams {
    fn from(dto: UpdateAuthorDto) -> Self {
        Self { name: dto.name }
    }
}
