use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        author::{AuthorDto, CreateAuthorDto, UpdateAuthorDto},
    },
    server::{
        controller::extract::{JsonBody, RouteId},
        data::context::LibraryContext,
        error::AppError,
        model::author::{Author, CreateAuthorParams, UpdateAuthorParams},
        service::author::AuthorService,
    },
};

/// Tag for grouping author endpoints in OpenAPI documentation
pub static AUTHOR_TAG: &str = "author";

/// List every author with their books.
#[utoipa::path(
    get,
    path = "/authors",
    tag = AUTHOR_TAG,
    responses(
        (status = 200, description = "Successfully retrieved authors", body = Vec<AuthorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_authors(context: LibraryContext) -> Result<impl IntoResponse, AppError> {
    let authors = AuthorService::new(context).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(authors.into_iter().map(Author::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get an author by ID with their books.
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = AUTHOR_TAG,
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved author", body = AuthorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_author_by_id(
    context: LibraryContext,
    RouteId(id): RouteId,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthorService::new(context).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(author.into_dto())))
}

/// Create a new author.
#[utoipa::path(
    post,
    path = "/authors",
    tag = AUTHOR_TAG,
    request_body = CreateAuthorDto,
    responses(
        (status = 201, description = "Successfully created author", body = AuthorDto),
        (status = 400, description = "Name is empty", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_author(
    context: LibraryContext,
    JsonBody(payload): JsonBody<CreateAuthorDto>,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthorService::new(context)
        .create(CreateAuthorParams::from(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/authors/{}", author.id))],
        Json(author.into_dto()),
    ))
}

/// Rename an author.
///
/// Books are not touched; any `books` array in the payload is ignored.
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = AUTHOR_TAG,
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    request_body = UpdateAuthorDto,
    responses(
        (status = 204, description = "Successfully updated author"),
        (status = 400, description = "Name is empty", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_author(
    context: LibraryContext,
    RouteId(id): RouteId,
    JsonBody(payload): JsonBody<UpdateAuthorDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthorService::new(context)
        .update(id, UpdateAuthorParams::from(payload))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an author together with their books.
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = AUTHOR_TAG,
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted author"),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_author(
    context: LibraryContext,
    RouteId(id): RouteId,
) -> Result<impl IntoResponse, AppError> {
    AuthorService::new(context).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
