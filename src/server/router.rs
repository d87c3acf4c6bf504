use std::any::Any;

use axum::{response::Response, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, author, book},
    error::unexpected_error_response,
    state::AppState,
};

/// Path of the Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/swagger";

/// Path of the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/swagger/v1/swagger.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Management API",
        version = "v1",
        description = "CRUD API for books and authors"
    ),
    tags(
        (name = "book", description = "Book management"),
        (name = "author", description = "Author management"),
        (name = "system", description = "Error handling")
    )
)]
struct ApiDoc;

/// Builds every route of the API, the Swagger UI and the fallback.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(book::get_books, book::create_book))
        .routes(routes!(
            book::get_book_by_id,
            book::update_book,
            book::delete_book
        ))
        .routes(routes!(author::get_authors, author::create_author))
        .routes(routes!(
            author::get_author_by_id,
            author::update_author,
            author::delete_author
        ))
        .routes(routes!(controller::error))
        .split_for_parts();

    router
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, api))
        .fallback(controller::fallback)
}

/// Attaches state and the middleware stack.
///
/// Panics inside handlers are turned into the same generic 500 body as `/error`.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic payload"
    };

    tracing::error!("Request handler panicked: {}", detail);

    unexpected_error_response()
}
