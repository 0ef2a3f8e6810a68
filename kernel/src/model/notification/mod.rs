use crate::model::id::{NotificationId, UserId};
use chrono::{DateTime, Utc};

// 通知はタスク割り当ての副作用としてのみ作成される
// 変更は既読フラグの反転のみで、削除されることはない
#[derive(Debug)]
pub struct Notification {
    pub notification_id: NotificationId,
    pub user_id: UserId,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
