use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::notification::{
    list_notifications, mark_all_notifications_read, mark_notification_read,
};

pub fn build_notification_routers() -> Router<AppRegistry> {
    let notifications_routers = Router::new()
        .route("/:username", get(list_notifications))
        .route("/:notification_id/read", put(mark_notification_read))
        .route("/mark_all_read", put(mark_all_notifications_read));

    Router::new().nest("/notifications", notifications_routers)
}
