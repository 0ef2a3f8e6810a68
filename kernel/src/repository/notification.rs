use crate::model::{
    id::{NotificationId, UserId},
    notification::Notification,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    // ユーザー ID に紐づく通知を作成日時の降順で取得する
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Notification>>;
    // 通知を既読にする
    // すでに既読の通知に対して呼び出しても成功する（冪等）
    async fn mark_read(&self, notification_id: NotificationId) -> AppResult<()>;
    // ユーザー ID に紐づくすべての通知を既読にする
    async fn mark_all_read(&self, user_id: UserId) -> AppResult<()>;
}
