//! HTTP request handlers.
//!
//! Each handler receives a fresh `LibraryContext` through its extractor, hands it to the
//! matching service, and converts the result into a status code and DTO.

pub mod author;
pub mod book;
pub mod extract;

use axum::{http::StatusCode, response::IntoResponse, response::Response};

use crate::{model::api::ErrorDto, server::error::unexpected_error_response};

/// Tag for grouping miscellaneous endpoints in OpenAPI documentation
pub static SYSTEM_TAG: &str = "system";

/// Generic handler for unhandled server errors.
///
/// # Returns
/// - `500 Internal Server Error` - Always, with the generic error message
#[utoipa::path(
    get,
    path = "/error",
    tag = SYSTEM_TAG,
    responses(
        (status = 500, description = "Unhandled server error", body = ErrorDto)
    ),
)]
pub async fn error() -> Response {
    unexpected_error_response()
}

/// Fallback for any route that does not match.
pub async fn fallback() -> Response {
    page_not_found()
}

/// Plain-text 404 shared by the fallback and the `{id}` extractor.
pub fn page_not_found() -> Response {
    (StatusCode::NOT_FOUND, "Page not found").into_response()
}

#[cfg(test)]
mod test;
