//! Error types and HTTP response handling.
//!
//! `AppError` is the application's top-level error type: it wraps the domain
//! error enums and the infrastructure failure modes, and implements
//! `IntoResponse` so handlers can return `Result<_, AppError>` directly.
//! Domain errors map to their own status codes; infrastructure errors are
//! logged server-side and collapse to a generic 500 body.

pub mod auth;
pub mod booking;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, booking::BookingError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates every error the application can produce. Most variants use
/// `#[from]` so lower layers can rely on `?`. `AuthError` and `BookingError`
/// carry their own response mapping; the remaining variants use standard
/// status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or credential error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 409 Conflict, etc.).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Booking state machine error.
    ///
    /// Delegates to `BookingError::into_response()` for custom status code mapping
    /// (404 Not Found, 409 Conflict, 403 Forbidden).
    #[error(transparent)]
    BookingErr(#[from] BookingError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    /// Distinct from every domain error: it signals the store itself failed and the
    /// caller may retry later.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error; without a working session store
    /// no caller can be identified.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket I/O error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The message is logged server-side
    /// and the client sees a generic body.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - Variable - For `AuthErr` and `BookingErr`, delegated to their `into_response()`
/// - 500 Internal Server Error - For everything else, with the cause logged
///   server-side and a generic body returned
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BookingErr(err) => err.into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper turning any displayable error into a 500 response.
///
/// The wrapped error is logged in full; the client body never carries its
/// message. Fallback for variants without a specific mapping of their own.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
