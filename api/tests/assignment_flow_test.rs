use adapter::database::ConnectionPool;
use api::handler::auth::login;
use api::handler::notification::{list_notifications, mark_notification_read};
use api::handler::task::{assign_task, list_tasks, update_task_state};
use api::handler::user::register_user;
use api::model::auth::LoginRequest;
use api::model::task::{AssignTaskRequest, UpdateTaskStateRequest};
use api::model::user::{CreateUserRequest, RoleName};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use registry::AppRegistry;
use shared::error::AppError;

fn build_registry(pool: sqlx::SqlitePool) -> AppRegistry {
    AppRegistry::new(ConnectionPool::new(pool))
}

async fn signup(registry: &AppRegistry, username: &str, role: RoleName) {
    register_user(
        State(registry.clone()),
        Json(CreateUserRequest {
            username: username.into(),
            password: "passw0rd".into(),
            role,
            email: None,
            phone: None,
            push_token: None,
        }),
    )
    .await
    .unwrap();
}

fn assignment(assigned_by: &str, assigned_to: &str, title: &str) -> AssignTaskRequest {
    AssignTaskRequest {
        assigned_by: assigned_by.into(),
        assigned_to: assigned_to.into(),
        title: title.into(),
        description: None,
        due_date: Some("2025-03-01".into()),
        priority: None,
        status: None,
        progress: None,
    }
}

#[sqlx::test(migrations = "../adapter/migrations")]
async fn assigning_a_task_notifies_the_assignee(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
    let registry = build_registry(pool);
    signup(&registry, "alice", RoleName::TeamLeader).await;
    signup(&registry, "bob", RoleName::Member).await;

    let (status, Json(created)) = assign_task(
        State(registry.clone()),
        Json(assignment("alice", "bob", "Write report")),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    // 担当者には未読の通知がちょうど 1 件届く
    let Json(notifications) =
        list_notifications(Path("bob".into()), State(registry.clone())).await?;
    assert_eq!(notifications.items.len(), 1);
    assert_eq!(
        notifications.items[0].message,
        "You have a new task: Write report"
    );
    assert!(!notifications.items[0].is_read);

    // 依頼者側には通知は作成されない
    let Json(notifications) =
        list_notifications(Path("alice".into()), State(registry.clone())).await?;
    assert!(notifications.items.is_empty());

    let Json(tasks) = list_tasks(Path("bob".into()), State(registry)).await?;
    assert_eq!(tasks.items.len(), 1);
    assert_eq!(tasks.items[0].task_id, created.task_id);
    assert_eq!(tasks.items[0].status, "Pending");
    assert_eq!(tasks.items[0].priority, "Normal");
    assert_eq!(tasks.items[0].progress, "0%");

    Ok(())
}

#[sqlx::test(migrations = "../adapter/migrations")]
async fn unknown_users_fail_lookup_and_persist_nothing(
    pool: sqlx::SqlitePool,
) -> anyhow::Result<()> {
    let registry = build_registry(pool.clone());
    signup(&registry, "alice", RoleName::Member).await;

    let res = assign_task(
        State(registry.clone()),
        Json(assignment("ghost", "alice", "Write report")),
    )
    .await;
    assert!(matches!(res, Err(AppError::EntityNotFound(_))));

    let res = assign_task(
        State(registry.clone()),
        Json(assignment("alice", "ghost", "Write report")),
    )
    .await;
    assert!(matches!(res, Err(AppError::EntityNotFound(_))));

    // 解決に失敗した割り当てはタスクも通知も残さない
    let task_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(&pool)
        .await?;
    let notification_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notifications")
        .fetch_one(&pool)
        .await?;
    assert_eq!(task_count, 0);
    assert_eq!(notification_count, 0);

    Ok(())
}

#[sqlx::test(migrations = "../adapter/migrations")]
async fn malformed_due_date_is_a_validation_error(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
    let registry = build_registry(pool);
    signup(&registry, "alice", RoleName::Member).await;
    signup(&registry, "bob", RoleName::Member).await;

    let mut req = assignment("alice", "bob", "Write report");
    req.due_date = Some("01-03-2025".into());

    let res = assign_task(State(registry), Json(req)).await;
    assert!(matches!(res, Err(AppError::ConvertToDateError(_))));

    Ok(())
}

#[sqlx::test(migrations = "../adapter/migrations")]
async fn privileged_roles_see_all_tasks(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
    let registry = build_registry(pool);
    signup(&registry, "alice", RoleName::TeamLeader).await;
    signup(&registry, "bob", RoleName::Member).await;
    signup(&registry, "carol", RoleName::Member).await;

    assign_task(
        State(registry.clone()),
        Json(assignment("alice", "bob", "task for bob")),
    )
    .await?;
    assign_task(
        State(registry.clone()),
        Json(assignment("alice", "carol", "task for carol")),
    )
    .await?;

    // Team Leader は担当にかかわらず全件を見る
    let Json(tasks) = list_tasks(Path("alice".into()), State(registry.clone())).await?;
    assert_eq!(tasks.items.len(), 2);

    // Member は自分が担当するタスクのみ
    let Json(tasks) = list_tasks(Path("bob".into()), State(registry.clone())).await?;
    assert_eq!(tasks.items.len(), 1);
    assert_eq!(tasks.items[0].title, "task for bob");

    let res = list_tasks(Path("ghost".into()), State(registry)).await;
    assert!(matches!(res, Err(AppError::EntityNotFound(_))));

    Ok(())
}

#[sqlx::test(migrations = "../adapter/migrations")]
async fn assignee_and_privileged_roles_may_update_task_state(
    pool: sqlx::SqlitePool,
) -> anyhow::Result<()> {
    let registry = build_registry(pool);
    signup(&registry, "alice", RoleName::TeamLeader).await;
    signup(&registry, "bob", RoleName::Member).await;
    signup(&registry, "carol", RoleName::Member).await;

    let (_, Json(created)) = assign_task(
        State(registry.clone()),
        Json(assignment("alice", "bob", "Write report")),
    )
    .await?;

    // 担当者本人は更新できる
    let status = update_task_state(
        Path(created.task_id.clone()),
        State(registry.clone()),
        Json(UpdateTaskStateRequest {
            username: "bob".into(),
            status: Some("In Progress".into()),
            progress: Some("30%".into()),
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    // 担当者でも権限ロールでもないユーザーは拒否される
    let res = update_task_state(
        Path(created.task_id.clone()),
        State(registry.clone()),
        Json(UpdateTaskStateRequest {
            username: "carol".into(),
            status: Some("Done".into()),
            progress: None,
        }),
    )
    .await;
    assert!(matches!(res, Err(AppError::ForbiddenOperation)));

    let Json(tasks) = list_tasks(Path("bob".into()), State(registry)).await?;
    assert_eq!(tasks.items[0].status, "In Progress");
    assert_eq!(tasks.items[0].progress, "30%");

    Ok(())
}

#[sqlx::test(migrations = "../adapter/migrations")]
async fn login_verifies_credentials(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
    let registry = build_registry(pool);
    signup(&registry, "alice", RoleName::Admin).await;

    let Json(res) = login(
        State(registry.clone()),
        Json(LoginRequest {
            username: "alice".into(),
            password: "passw0rd".into(),
        }),
    )
    .await?;
    assert_eq!(res.username, "alice");

    let res = login(
        State(registry),
        Json(LoginRequest {
            username: "alice".into(),
            password: "wrong".into(),
        }),
    )
    .await;
    assert!(matches!(res, Err(AppError::UnauthenticatedError)));

    Ok(())
}

#[sqlx::test(migrations = "../adapter/migrations")]
async fn marking_a_notification_read_twice_succeeds(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
    let registry = build_registry(pool);
    signup(&registry, "alice", RoleName::Member).await;
    signup(&registry, "bob", RoleName::Member).await;

    assign_task(
        State(registry.clone()),
        Json(assignment("alice", "bob", "Write report")),
    )
    .await?;

    let Json(notifications) =
        list_notifications(Path("bob".into()), State(registry.clone())).await?;
    let notification_id = notifications.items[0].notification_id.clone();

    mark_notification_read(Path(notification_id.clone()), State(registry.clone())).await?;
    mark_notification_read(Path(notification_id), State(registry.clone())).await?;

    let Json(notifications) = list_notifications(Path("bob".into()), State(registry)).await?;
    assert!(notifications.items[0].is_read);

    Ok(())
}
