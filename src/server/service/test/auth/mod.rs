use crate::{
    model::auth::{LoginDto, SignupDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        service::auth::AuthService,
    },
};
use test_utils::builder::TestBuilder;


fn signup_dto(username: &str, email: &str) -> SignupDto {
    SignupDto {
        username: username.to_string(),
        email: email.to_string(),
        password: "correct-horse".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        phone: None,
    }
}
