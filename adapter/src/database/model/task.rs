use kernel::model::task::Task;
use sqlx::types::chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

// タスク一覧・単体取得で使う型
#[derive(FromRow)]
pub struct TaskRow {
    pub task_id: String,
    pub title: String,
    pub description: String,
    pub assigned_by: String,
    pub assigned_to: String,
    pub status: String,
    pub priority: String,
    pub progress: String,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(value: TaskRow) -> Self {
        let TaskRow {
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
        Task {
            task_id: task_id.into(),
            title,
            description,
            assigned_by: assigned_by.into(),
            assigned_to: assigned_to.into(),
            status,
            priority,
            progress,
            due_date,
            created_at,
        }
    }
}
