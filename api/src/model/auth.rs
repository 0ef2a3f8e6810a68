use crate::model::user::RoleName;
use garde::Validate;
use kernel::model::{id::UserId, user::User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: UserId,
    pub username: String,
    pub role: RoleName,
}

impl From<User> for LoginResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            username,
            role,
            ..
        } = value;
        Self {
            user_id,
            username,
            role: RoleName::from(role),
        }
    }
}
