use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::auth::login;

pub fn routes() -> Router<AppRegistry> {
    let auth_routers = Router::new().route("/login", post(login));

    Router::new().nest("/auth", auth_routers)
}
