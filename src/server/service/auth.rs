//! Credential service: signup and login.
//!
//! Issues the identity the rest of the system consumes. Passwords are hashed
//! with bcrypt at signup and verified against the stored hash at login; no
//! plaintext comparison happens anywhere. The session established by the
//! controller after a successful call is the opaque token carrying the user id.

use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{LoginDto, SignupDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParam, User},
    },
};

const MIN_PASSWORD_LENGTH: usize = 6;

/// Service providing signup and login for application users.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// Validates the password length, rejects usernames and emails that are
    /// already registered, hashes the password, and stores the user.
    ///
    /// # Arguments
    /// - `dto` - Signup payload
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Password shorter than 6 characters
    /// - `Err(AppError::AuthErr(UserAlreadyExists))` - Username or email taken
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn signup(&self, dto: SignupDto) -> Result<User, AppError> {
        if dto.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo
            .exists_by_username_or_email(&dto.username, &dto.email)
            .await?
        {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = bcrypt::hash(&dto.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

        let user = user_repo
            .create(CreateUserParam {
                username: dto.username,
                email: dto.email,
                password_hash,
                first_name: dto.first_name,
                last_name: dto.last_name,
                phone: dto.phone,
            })
            .await?;

        Ok(user)
    }

    /// Verifies a user's credentials.
    ///
    /// An unknown email and a wrong password produce the same
    /// `InvalidCredentials` error.
    ///
    /// # Arguments
    /// - `dto` - Login payload
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials verified
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError)` - Hash verification or database failure
    pub async fn login(&self, dto: LoginDto) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_email(&dto.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let valid = bcrypt::verify(&dto.password, &credentials.password_hash)
            .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(credentials.user)
    }
}
