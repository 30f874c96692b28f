//! Type-safe session management wrappers.
//!
//! This module provides a type-safe interface for the authentication state kept
//! in the session. The wrapper exposes only the operations the application
//! needs, preventing key typos and centralizing session-related logic.

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles user authentication state: storing and retrieving the authenticated
/// user's id and session lifecycle operations. The signed session cookie is
/// the opaque credential clients hold between requests.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the authenticated user's id in the session.
    ///
    /// Called after a successful signup or login; from this point the session
    /// cookie identifies the user on guarded endpoints.
    ///
    /// # Arguments
    /// - `user_id` - Id of the authenticated user
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr)` - Session store failure
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Gets the authenticated user's id from the session, if any.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - Session carries an authenticated user
    /// - `Ok(None)` - No authenticated user in this session
    /// - `Err(AppError::SessionErr)` - Session store failure
    pub async fn user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Removes the session record and clears the cookie.
    ///
    /// # Returns
    /// - `Ok(())` - Session cleared
    /// - `Err(AppError::SessionErr)` - Session store failure
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
