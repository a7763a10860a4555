use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Serialized user account.
///
/// The stored password hash has no field here so it can never reach a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

/// Parameters for creating a new user
#[derive(Clone, Debug, Deserialize)]
pub struct NewUserParams {
    pub email: String,
    /// Plain text password, hashed before it is stored
    pub password: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

/// Partial update of a user, fields left as `None` are unchanged
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

fn default_is_active() -> bool {
    true
}
