use kernel::model::notification::Notification;
use sqlx::types::chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct NotificationRow {
    pub notification_id: String,
    pub user_id: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<NotificationRow> for Notification {
    fn from(value: NotificationRow) -> Self {
        let NotificationRow {
            notification_id,
            user_id,
            message,
            is_read,
            created_at,
        } = value;
        Notification {
            notification_id: notification_id.into(),
            user_id: user_id.into(),
            message,
            is_read,
            created_at,
        }
    }
}
