/**
 * Request Body and Path Extractors
 *
 * Wrappers around axum's `Json` and `Path` whose rejections go through
 * [`BackendError`], so malformed input answers with the usual
 * `{ "error", "status" }` body instead of axum's plain-text rejection.
 *
 * - `ValidatedJson` - any body rejection (bad JSON, wrong field type,
 *   missing `Content-Type`) is a 400
 * - `ValidatedPath` - a path segment that does not parse names no
 *   resource, so it is a 404
 */
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request,
    },
    http::request::Parts,
    Json,
};

use crate::backend::error::BackendError;

/// JSON body extractor rejecting with `BackendError::Validation`
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(BackendError::Validation {
                field: None,
                message: rejection.body_text(),
            }),
        }
    }
}

/// Path extractor rejecting with `BackendError::NotFound`
#[derive(Debug, Clone)]
pub struct ValidatedPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("Unmatched path parameter: {}", rejection.body_text());
                Err(BackendError::not_found("Resource not found"))
            }
        }
    }
}
