//! Translation of domain errors into HTTP responses.
//!
//! Every domain error becomes a `{"message": …}` body carrying the error's
//! Display text and the status its class maps to: not-found outcomes are
//! 404, conflicts (including unique-constraint violations surfacing from
//! racing writers) are 409, everything else is a 500 with a generic body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ratehub_core::currencies::CurrencyError;
use ratehub_core::errors::{DatabaseError, Error};
use ratehub_core::fx::FxError;
use serde_json::json;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Currency(CurrencyError::NotFound(_))
            | Error::Fx(FxError::RateNotFound(_))
            | Error::Fx(FxError::PairCurrenciesNotFound { .. })
            | Error::Database(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
            Error::Currency(CurrencyError::AlreadyExists(_))
            | Error::Fx(FxError::PairAlreadyExists(_))
            | Error::Database(DatabaseError::UniqueViolation(_)) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Unhandled domain error: {}", self.0);
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
