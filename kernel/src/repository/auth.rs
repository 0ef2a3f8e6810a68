use crate::model::user::User;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    // ユーザー名とパスワードを検証し、一致したユーザーを返す
    async fn verify_user(&self, username: &str, password: &str) -> AppResult<User>;
}
