use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id in the session.
    ///
    /// The request either carried no session cookie or a session that never went
    /// through login. Results in a 401 Unauthorized response.
    #[error("Request has no authenticated session")]
    NotAuthenticated,

    /// The session references a user id that no longer resolves to a user.
    ///
    /// Results in a 401 Unauthorized response; the stale session cannot be
    /// trusted.
    #[error("Session user {0} not found in database")]
    UserNotInDatabase(i32),

    /// Login failed: unknown email or wrong password.
    ///
    /// The two cases are deliberately indistinguishable in the response.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Signup attempted with a username or email that is already registered.
    ///
    /// Results in a 409 Conflict response.
    #[error("User with this email or username already exists")]
    UserAlreadyExists,

    /// The password hashing backend failed.
    ///
    /// Results in a 500 Internal Server Error response with the cause logged
    /// server-side only.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For missing sessions, stale sessions, and failed logins
/// - 409 Conflict - For duplicate signups
/// - 500 Internal Server Error - For password hashing failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not authenticated".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::UserAlreadyExists => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "User with this email or username already exists".to_string(),
                }),
            )
                .into_response(),
            Self::PasswordHash(msg) => {
                tracing::error!("Password hashing failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
