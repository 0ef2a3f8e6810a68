use crate::database::{model::notification::NotificationRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::{NotificationId, UserId};
use kernel::model::notification::Notification;
use kernel::repository::notification::NotificationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct NotificationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryImpl {
    // ユーザー ID に紐づく通知を新しい順に取得する
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, NotificationRow>(
            r#"
                SELECT
                notification_id,
                user_id,
                message,
                is_read,
                created_at
                FROM notifications
                WHERE user_id = $1
                ORDER BY created_at DESC
                ;
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Notification::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    // 通知を既読にする
    // すでに既読の場合や該当 ID が存在しない場合も成功として扱う（冪等）
    async fn mark_read(&self, notification_id: NotificationId) -> AppResult<()> {
        sqlx::query(
            r#"
                UPDATE notifications
                SET
                    is_read = TRUE
                WHERE notification_id = $1
            "#,
        )
        .bind(notification_id.as_str())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }

    // ユーザー ID に紐づくすべての通知を既読にする
    async fn mark_all_read(&self, user_id: UserId) -> AppResult<()> {
        sqlx::query(
            r#"
                UPDATE notifications
                SET
                    is_read = TRUE
                WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }
}
