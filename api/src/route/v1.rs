use super::{
    auth, health::build_health_check_routers, notification::build_notification_routers,
    task::build_task_routers, user::build_user_router,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_task_routers())
        .merge(build_notification_routers())
        .merge(build_user_router())
        .merge(auth::routes());
    Router::new().nest("/api/v1", router)
}
