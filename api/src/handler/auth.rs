use crate::model::auth::{LoginRequest, LoginResponse};
use axum::{extract::State, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    req.validate(&())?;

    registry
        .auth_repository()
        .verify_user(&req.username, &req.password)
        .await
        .map(LoginResponse::from)
        .map(Json)
}
