use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    api::{flexible_date_time, null_as_empty, null_as_zero},
    author::AuthorDto,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    /// Author name as entered on the book record.
    pub author: String,
    pub publication_date: NaiveDateTime,
    pub isbn: String,
    pub author_id: i32,
    /// Populated on list and get-by-id responses, `null` otherwise.
    #[schema(no_recursion)]
    pub author_details: Option<AuthorDto>,
}

/// Payload for `POST /books`.
///
/// Missing or `null` text fields become empty strings so they are reported as validation
/// errors rather than deserialization failures. A missing or `null` `authorId` becomes 0,
/// which never matches an author.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookDto {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "flexible_date_time")]
    pub publication_date: NaiveDateTime,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub isbn: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub author_id: i32,
}

/// Payload for `PUT /books/{id}`. Replaces every mutable field of the book.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookDto {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "flexible_date_time")]
    pub publication_date: NaiveDateTime,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub isbn: String,
}
