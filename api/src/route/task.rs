use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::task::{assign_task, list_tasks, update_task_state};

pub fn build_task_routers() -> Router<AppRegistry> {
    let tasks_routers = Router::new()
        .route("/", post(assign_task))
        .route("/:username", get(list_tasks))
        .route("/:task_id/state", put(update_task_state));

    Router::new().nest("/tasks", tasks_routers)
}
