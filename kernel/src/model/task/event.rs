use crate::model::id::{TaskId, UserId};
use chrono::NaiveDate;
use derive_new::new;

#[derive(new)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    pub assigned_by: UserId,
    pub assigned_to: UserId,
    pub status: String,
    pub priority: String,
    pub progress: String,
    pub due_date: NaiveDate,
}

#[derive(new)]
pub struct UpdateTaskState {
    pub task_id: TaskId,
    pub status: Option<String>,
    pub progress: Option<String>,
}
