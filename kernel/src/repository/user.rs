use crate::model::{
    id::UserId,
    user::{
        event::{CreateUser, UpdatePushToken},
        User,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    // ユーザーを新規登録する
    // ユーザー名の一意性はストアの UNIQUE 制約で担保する
    async fn create(&self, event: CreateUser) -> AppResult<UserId>;
    // ユーザー名からユーザーを取得する（大文字小文字を区別しない）
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    // すべてのユーザーを取得する
    async fn find_all(&self) -> AppResult<Vec<User>>;
    // プッシュ通知トークンを更新する
    async fn update_push_token(&self, event: UpdatePushToken) -> AppResult<()>;
}
