use crate::model::{
    id::{TaskId, UserId},
    task::{
        event::{CreateTask, UpdateTaskState},
        Task,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait TaskRepository: Send + Sync {
    // タスクの割り当てを行う
    // タスクの登録と担当者への通知の登録は単一トランザクションで行い、
    // どちらか一方だけが残ることはない
    async fn create(&self, event: CreateTask) -> AppResult<TaskId>;
    // すべてのタスクを期日の昇順で取得する
    async fn find_all(&self) -> AppResult<Vec<Task>>;
    // 担当者 ID に紐づくタスクを期日の昇順で取得する
    async fn find_by_assignee(&self, user_id: UserId) -> AppResult<Vec<Task>>;
    // task_id から Task 型のデータを渡す
    async fn find_by_id(&self, task_id: TaskId) -> AppResult<Option<Task>>;
    // status / progress を更新する
    async fn update_state(&self, event: UpdateTaskState) -> AppResult<()>;
}
