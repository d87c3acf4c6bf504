//! Request extractors shared by the handlers.
//!
//! Both wrap an axum extractor and replace its plain-text rejection: an id segment that is
//! not an `i32` is treated as an unmatched route, and a body that is not valid JSON for the
//! payload type answers 400 with an `ErrorDto`.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::Response,
    Json,
};

use crate::server::{controller::page_not_found, error::AppError};

/// Integer `{id}` route segment.
///
/// Rejects with the fallback 404 "Page not found", so `/books/abc` or an id outside the
/// `i32` range behaves like any other route that does not exist.
pub struct RouteId(pub i32);

impl<S> FromRequestParts<S> for RouteId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<i32>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| Self(id))
            .map_err(|_| page_not_found())
    }
}

/// JSON request body whose rejection is an `AppError::BadRequest`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
    }
}
