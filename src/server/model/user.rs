//! User domain models and parameters.
//!
//! Provides the user domain model exposed to services and controllers, the
//! credential pair used by login, and the parameter type for user creation.
//! The password hash never leaves the data and credential layers.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Application user.
///
/// Carries profile data only; the stored password hash is deliberately not
/// part of this model.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model, without the password hash
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            phone: entity.phone,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// A user together with their stored password hash.
///
/// Returned only to the credential service for hash verification during
/// login; never serialized.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Parameters for creating a new user at signup.
///
/// The password arrives already hashed; the repository never sees plaintext.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}
