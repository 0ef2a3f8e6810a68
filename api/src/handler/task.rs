use crate::model::task::{
    AssignTaskRequest, CreatedTaskResponse, TasksResponse, UpdateTaskStateRequest,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    id::TaskId,
    task::event::{CreateTask, UpdateTaskState},
    user::User,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

// ユーザー名から登録済みユーザーを解決する
// 未登録の場合は EntityNotFound で失敗し、ストアには何も書き込まれない
async fn resolve_user(registry: &AppRegistry, username: &str, label: &str) -> AppResult<User> {
    registry
        .user_repository()
        .find_by_username(username)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("{label}（{username}）が見つかりませんでした。"))
        })
}

pub async fn assign_task(
    State(registry): State<AppRegistry>,
    Json(req): Json<AssignTaskRequest>,
) -> AppResult<(StatusCode, Json<CreatedTaskResponse>)> {
    req.validate(&())?;

    let assigner = resolve_user(&registry, &req.assigned_by, "依頼者").await?;
    let assignee = resolve_user(&registry, &req.assigned_to, "担当者").await?;

    // 期日は YYYY-MM-DD のカレンダー日付のみ受け付ける
    let due_date = match req.due_date.as_deref() {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")?,
        None => Utc::now().date_naive(),
    };

    let create_task = CreateTask::new(
        req.title,
        req.description.unwrap_or_default(),
        assigner.user_id,
        assignee.user_id,
        req.status.unwrap_or_else(|| "Pending".into()),
        req.priority.unwrap_or_else(|| "Normal".into()),
        req.progress.unwrap_or_else(|| "0%".into()),
        due_date,
    );

    // タスクの登録と担当者への通知の登録はリポジトリ側で
    // 単一トランザクションとして行われる
    let task_id = registry.task_repository().create(create_task).await?;

    Ok((StatusCode::CREATED, Json(CreatedTaskResponse { task_id })))
}

pub async fn list_tasks(
    Path(username): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TasksResponse>> {
    let user = resolve_user(&registry, &username, "ユーザー").await?;

    // 権限のあるロールは全件、それ以外は自分が担当するタスクのみを返す
    let tasks = if user.role.is_privileged() {
        registry.task_repository().find_all().await?
    } else {
        registry
            .task_repository()
            .find_by_assignee(user.user_id)
            .await?
    };

    Ok(Json(TasksResponse::from(tasks)))
}

pub async fn update_task_state(
    Path(task_id): Path<TaskId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateTaskStateRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let user = resolve_user(&registry, &req.username, "ユーザー").await?;
    let task = registry
        .task_repository()
        .find_by_id(task_id.clone())
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("タスク（{task_id}）が見つかりませんでした。"))
        })?;

    // status / progress を変更できるのは権限のあるロールか担当者本人のみ
    if !user.role.is_privileged() && task.assigned_to != user.user_id {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .task_repository()
        .update_state(UpdateTaskState::new(task_id, req.status, req.progress))
        .await
        .map(|_| StatusCode::OK)
}
