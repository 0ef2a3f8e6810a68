use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{NotificationId, UserId},
    notification::Notification,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub items: Vec<NotificationResponse>,
}

impl From<Vec<Notification>> for NotificationsResponse {
    fn from(value: Vec<Notification>) -> Self {
        Self {
            items: value.into_iter().map(NotificationResponse::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub notification_id: NotificationId,
    pub user_id: UserId,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(value: Notification) -> Self {
        let Notification {
            notification_id,
            user_id,
            message,
            is_read,
            created_at,
        } = value;
        Self {
            notification_id,
            user_id,
            message,
            is_read,
            created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MarkAllReadRequest {
    #[garde(length(min = 1))]
    pub username: String,
}
