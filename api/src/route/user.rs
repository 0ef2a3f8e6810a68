use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{list_users, register_user, update_push_token};

pub fn build_user_router() -> Router<AppRegistry> {
    let users_routers = Router::new()
        .route("/", post(register_user))
        .route("/", get(list_users))
        .route("/push_token", put(update_push_token));

    Router::new().nest("/users", users_routers)
}
