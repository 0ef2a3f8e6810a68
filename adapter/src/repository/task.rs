use crate::database::{model::task::TaskRow, ConnectionPool};
use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::id::{NotificationId, TaskId, UserId};
use kernel::model::task::{
    event::{CreateTask, UpdateTaskState},
    Task,
};
use kernel::repository::task::TaskRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct TaskRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TaskRepository for TaskRepositoryImpl {
    // タスクの割り当てを行う
    async fn create(&self, event: CreateTask) -> AppResult<TaskId> {
        let mut tx = self.db.begin().await?;

        // タスク処理を行う、すなわち tasks テーブルにレコードを追加する
        let task_id = TaskId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO tasks
                (task_id, title, description, assigned_by, assigned_to,
                status, priority, progress, due_date, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                ;
            "#,
        )
        .bind(task_id.as_str())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.assigned_by.as_str())
        .bind(event.assigned_to.as_str())
        .bind(&event.status)
        .bind(&event.priority)
        .bind(&event.progress)
        .bind(event.due_date)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No task record has been created".into(),
            ));
        }

        // 担当者への通知をタスクと同一トランザクション内で登録する
        // タスクだけが残り通知が残らない、という部分適用を起こさないため、
        // どちらかの INSERT が失敗した場合は両方ロールバックする
        let notification_id = NotificationId::new();
        let message = format!("You have a new task: {}", event.title);
        let res = sqlx::query(
            r#"
                INSERT INTO notifications
                (notification_id, user_id, message, is_read, created_at)
                VALUES ($1, $2, $3, $4, $5)
                ;
            "#,
        )
        .bind(notification_id.as_str())
        .bind(event.assigned_to.as_str())
        .bind(&message)
        .bind(false)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No notification record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(task_id)
    }

    // すべてのタスクを期日の昇順で取得する
    async fn find_all(&self) -> AppResult<Vec<Task>> {
        sqlx::query_as::<_, TaskRow>(
            r#"
                SELECT
                task_id,
                title,
                description,
                assigned_by,
                assigned_to,
                status,
                priority,
                progress,
                due_date,
                created_at
                FROM tasks
                ORDER BY due_date ASC, created_at ASC
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Task::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    // 担当者 ID に紐づくタスクを取得する
    async fn find_by_assignee(&self, user_id: UserId) -> AppResult<Vec<Task>> {
        // find_all の SQL に担当者で絞り込む WHERE 句を追加したものである
        sqlx::query_as::<_, TaskRow>(
            r#"
                SELECT
                task_id,
                title,
                description,
                assigned_by,
                assigned_to,
                status,
                priority,
                progress,
                due_date,
                created_at
                FROM tasks
                WHERE assigned_to = $1
                ORDER BY due_date ASC, created_at ASC
                ;
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Task::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, task_id: TaskId) -> AppResult<Option<Task>> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
                SELECT
                task_id,
                title,
                description,
                assigned_by,
                assigned_to,
                status,
                priority,
                progress,
                due_date,
                created_at
                FROM tasks
                WHERE task_id = $1
                ;
            "#,
        )
        .bind(task_id.as_str())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Task::from))
    }

    // status / progress を更新する
    async fn update_state(&self, event: UpdateTaskState) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE tasks
                SET
                    status = COALESCE($1, status),
                    progress = COALESCE($2, progress)
                WHERE task_id = $3
            "#,
        )
        .bind(&event.status)
        .bind(&event.progress)
        .bind(event.task_id.as_str())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified task not found".into()));
        }

        Ok(())
    }
}
