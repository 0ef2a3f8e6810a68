use crate::model::{id::UserId, role::Role};
use derive_new::new;

#[derive(new)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub push_token: Option<String>,
}

#[derive(new)]
pub struct UpdatePushToken {
    pub user_id: UserId,
    pub push_token: String,
}
