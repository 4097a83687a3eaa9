/**
 * Error Conversion
 *
 * Folds domain rejections into [`BackendError`] and renders it as an HTTP
 * response.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */
use axum::response::{IntoResponse, Json, Response};

use crate::backend::auth::AuthError;
use crate::backend::error::types::BackendError;
use crate::backend::reservations::ReservationError;

impl From<ReservationError> for BackendError {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::MissingField(field) => {
                BackendError::validation(field, format!("Missing required field: {field}"))
            }
            ReservationError::OutsideOpeningHours { .. } => {
                BackendError::validation("hour", err.to_string())
            }
            ReservationError::SlotInPast(_) | ReservationError::DateOutOfRange(_) => {
                BackendError::validation("date", err.to_string())
            }
            ReservationError::PastReservation(_) => BackendError::Validation {
                field: None,
                message: err.to_string(),
            },
            ReservationError::SlotTaken { .. } => BackendError::conflict(err.to_string()),
            ReservationError::NotFound(_) => BackendError::not_found(err.to_string()),
            ReservationError::NotOwner(_) => BackendError::authorization(err.to_string()),
            ReservationError::Storage(storage) => BackendError::Storage(storage),
        }
    }
}

impl From<AuthError> for BackendError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingFields => BackendError::Validation {
                field: None,
                message: "Missing required fields".to_string(),
            },
            AuthError::InvalidEmail => BackendError::validation("email", "Invalid email format"),
            AuthError::WeakPassword(_) => BackendError::validation("password", err.to_string()),
            AuthError::EmailInUse => BackendError::conflict("Email already in use"),
            AuthError::InvalidCredentials => BackendError::authentication("Invalid credentials"),
            AuthError::MissingToken
            | AuthError::MalformedHeader
            | AuthError::InvalidToken(_)
            | AuthError::ExpiredToken => {
                tracing::debug!("Rejected session token: {}", err);
                BackendError::authentication(err.to_string())
            }
            AuthError::UserNotFound(_) => BackendError::not_found("User not found"),
            AuthError::Hashing(_) | AuthError::Signing(_) => BackendError::internal(err.to_string()),
            AuthError::Storage(storage) => BackendError::Storage(storage),
        }
    }
}

impl IntoResponse for BackendError {
    /// Render as `{ "error", "status" }`
    ///
    /// 5xx detail is logged here and replaced by a generic message.
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self.message());
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    use crate::backend::error::StorageError;

    #[test]
    fn test_reservation_error_status() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let id = Uuid::new_v4();

        let cases = [
            (ReservationError::MissingField("object"), StatusCode::BAD_REQUEST),
            (
                ReservationError::OutsideOpeningHours { start, opening: 8, closing: 19 },
                StatusCode::BAD_REQUEST,
            ),
            (ReservationError::SlotInPast(date.and_time(start)), StatusCode::BAD_REQUEST),
            (ReservationError::DateOutOfRange(NaiveDate::MIN), StatusCode::BAD_REQUEST),
            (ReservationError::PastReservation(id), StatusCode::BAD_REQUEST),
            (ReservationError::SlotTaken { date, start }, StatusCode::CONFLICT),
            (ReservationError::NotFound(id), StatusCode::NOT_FOUND),
            (ReservationError::NotOwner(id), StatusCode::FORBIDDEN),
        ];

        for (err, expected) in cases {
            let backend: BackendError = err.into();
            assert_eq!(backend.status_code(), expected);
        }
    }

    #[test]
    fn test_auth_error_status() {
        let cases = [
            (AuthError::MissingFields, StatusCode::BAD_REQUEST),
            (AuthError::InvalidEmail, StatusCode::BAD_REQUEST),
            (AuthError::WeakPassword("must contain a digit"), StatusCode::BAD_REQUEST),
            (AuthError::EmailInUse, StatusCode::CONFLICT),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::MissingToken, StatusCode::UNAUTHORIZED),
            (AuthError::MalformedHeader, StatusCode::UNAUTHORIZED),
            (AuthError::ExpiredToken, StatusCode::UNAUTHORIZED),
            (AuthError::UserNotFound(Uuid::new_v4()), StatusCode::NOT_FOUND),
            (AuthError::Hashing("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            let backend: BackendError = err.into();
            assert_eq!(backend.status_code(), expected);
        }
    }

    #[test]
    fn test_storage_error_keeps_generic_message() {
        let err = ReservationError::Storage(StorageError::Database(sqlx::Error::PoolTimedOut));
        let backend: BackendError = err.into();
        assert_eq!(backend.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(backend.message(), crate::backend::error::types::INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_into_response_status() {
        let response = BackendError::conflict("taken").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
