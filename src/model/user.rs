use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User as exposed to clients. The stored password hash is never part of
/// this type.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}
