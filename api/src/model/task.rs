use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    id::{TaskId, UserId},
    task::Task,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignTaskRequest {
    // 依頼者・担当者はユーザー名で指定する
    #[garde(length(min = 1))]
    pub assigned_by: String,
    #[garde(length(min = 1))]
    pub assigned_to: String,
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    pub description: Option<String>,
    // YYYY-MM-DD 形式。パースはハンドラー側で行う
    #[garde(skip)]
    pub due_date: Option<String>,
    #[garde(skip)]
    pub priority: Option<String>,
    #[garde(skip)]
    pub status: Option<String>,
    #[garde(skip)]
    pub progress: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTaskResponse {
    pub task_id: TaskId,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksResponse {
    pub items: Vec<TaskResponse>,
}

impl From<Vec<Task>> for TasksResponse {
    fn from(value: Vec<Task>) -> Self {
        Self {
            items: value.into_iter().map(TaskResponse::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub task_id: TaskId,
    pub title: String,
    pub description: String,
    pub assigned_by: UserId,
    pub assigned_to: UserId,
    pub status: String,
    pub priority: String,
    pub progress: String,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(value: Task) -> Self {
        let Task {
            task_id,
            title,
            description,
            assigned_by,
            assigned_to,
            status,
            priority,
            progress,
            due_date,
            created_at,
        } = value;
        Self {
            task_id,
            title,
            description,
            assigned_by,
            assigned_to,
            status,
            priority,
            progress,
            due_date,
            created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStateRequest {
    // 要求者のユーザー名。権限の判定に使う
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(skip)]
    pub status: Option<String>,
    #[garde(skip)]
    pub progress: Option<String>,
}
