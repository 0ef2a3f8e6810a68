use crate::model::notification::{MarkAllReadRequest, NotificationsResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::NotificationId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn list_notifications(
    Path(username): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<NotificationsResponse>> {
    let user = registry
        .user_repository()
        .find_by_username(&username)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("ユーザー（{username}）が見つかりませんでした。"))
        })?;

    registry
        .notification_repository()
        .find_by_user_id(user.user_id)
        .await
        .map(NotificationsResponse::from)
        .map(Json)
}

// 既読化は冪等な操作であり、すでに既読でも成功を返す
pub async fn mark_notification_read(
    Path(notification_id): Path<NotificationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .notification_repository()
        .mark_read(notification_id)
        .await
        .map(|_| StatusCode::OK)
}

pub async fn mark_all_notifications_read(
    State(registry): State<AppRegistry>,
    Json(req): Json<MarkAllReadRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let user = registry
        .user_repository()
        .find_by_username(&req.username)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "ユーザー（{}）が見つかりませんでした。",
                req.username
            ))
        })?;

    registry
        .notification_repository()
        .mark_all_read(user.user_id)
        .await
        .map(|_| StatusCode::OK)
}
