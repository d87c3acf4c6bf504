use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        book::{BookDto, CreateBookDto, UpdateBookDto},
    },
    server::{
        controller::extract::{JsonBody, RouteId},
        data::context::LibraryContext,
        error::AppError,
        model::book::{Book, CreateBookParams, UpdateBookParams},
        service::book::BookService,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

/// List every book.
///
/// Each book is returned with its `authorDetails` eager-loaded.
///
/// # Returns
/// - `200 OK` - All books
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/books",
    tag = BOOK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved books", body = Vec<BookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_books(context: LibraryContext) -> Result<impl IntoResponse, AppError> {
    let books = BookService::new(context).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(books.into_iter().map(Book::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get a book by ID.
///
/// # Returns
/// - `200 OK` - The book with `authorDetails`
/// - `404 Not Found` - No book with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved book", body = BookDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book_by_id(
    context: LibraryContext,
    RouteId(id): RouteId,
) -> Result<impl IntoResponse, AppError> {
    let book = BookService::new(context).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(book.into_dto())))
}

/// Create a new book.
///
/// # Returns
/// - `201 Created` - The created book, with a `Location` header pointing at it
/// - `400 Bad Request` - Title, author or ISBN empty, or unknown `authorId`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/books",
    tag = BOOK_TAG,
    request_body = CreateBookDto,
    responses(
        (status = 201, description = "Successfully created book", body = BookDto),
        (status = 400, description = "Invalid book data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_book(
    context: LibraryContext,
    JsonBody(payload): JsonBody<CreateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let book = BookService::new(context)
        .create(CreateBookParams::from(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/books/{}", book.id))],
        Json(book.into_dto()),
    ))
}

/// Replace a book's title, author, publication date and ISBN.
///
/// # Returns
/// - `204 No Content` - Book updated
/// - `400 Bad Request` - Title, author or ISBN empty
/// - `404 Not Found` - No book with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBookDto,
    responses(
        (status = 204, description = "Successfully updated book"),
        (status = 400, description = "Invalid book data", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_book(
    context: LibraryContext,
    RouteId(id): RouteId,
    JsonBody(payload): JsonBody<UpdateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    BookService::new(context)
        .update(id, UpdateBookParams::from(payload))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a book.
///
/// # Returns
/// - `204 No Content` - Book deleted
/// - `404 Not Found` - No book with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted book"),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_book(
    context: LibraryContext,
    RouteId(id): RouteId,
) -> Result<impl IntoResponse, AppError> {
    BookService::new(context).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
