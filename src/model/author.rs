use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::null_as_empty, book::BookDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: i32,
    pub name: String,
    /// Books written by this author; empty unless eager-loaded.
    #[schema(no_recursion)]
    pub books: Vec<BookDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAuthorDto {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAuthorDto {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}
