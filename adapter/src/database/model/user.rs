use kernel::model::{role::Role, user::User};
use shared::error::AppError;
use sqlx::FromRow;
use std::str::FromStr;

#[derive(FromRow)]
pub struct UserRow {
    pub user_id: String,
    pub username: String,
    pub role: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub push_token: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            username,
            role,
            email,
            phone,
            push_token,
        } = value;
        // ストア上のロール文字列が列挙型に収まらない場合は変換エラーとする
        let role =
            Role::from_str(&role).map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        Ok(User {
            user_id: user_id.into(),
            username,
            role,
            email,
            phone,
            push_token,
        })
    }
}

// 資格情報の検証に使う型
// password_hash はこの型から外に出さない
#[derive(FromRow)]
pub struct UserCredentialRow {
    pub user_id: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub push_token: Option<String>,
}

impl UserCredentialRow {
    pub fn into_user(self) -> Result<User, AppError> {
        let UserCredentialRow {
            user_id,
            username,
            password_hash: _,
            role,
            email,
            phone,
            push_token,
        } = self;
        UserRow {
            user_id,
            username,
            role,
            email,
            phone,
            push_token,
        }
        .try_into()
    }
}
