use crate::model::id::{TaskId, UserId};
use chrono::{DateTime, NaiveDate, Utc};

pub mod event;

// タスクは作成後、status と progress 以外は変更されない
#[derive(Debug)]
pub struct Task {
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
