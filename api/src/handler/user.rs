use crate::model::user::{
    CreateUserRequest, UpdatePushTokenRequest, UpdatePushTokenRequestWithUserId, UsersResponse,
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    // ユーザー名の重複はストアの UNIQUE 制約違反として返ってくる
    registry
        .user_repository()
        .create(req.into())
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn list_users(State(registry): State<AppRegistry>) -> AppResult<Json<UsersResponse>> {
    registry
        .user_repository()
        .find_all()
        .await
        .map(UsersResponse::from)
        .map(Json)
}

pub async fn update_push_token(
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdatePushTokenRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let user = registry
        .user_repository()
        .find_by_username(&req.username)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "ユーザー（{}）が見つかりませんでした。",
                req.username
            ))
        })?;

    let event = UpdatePushTokenRequestWithUserId::new(user.user_id, req);
    registry
        .user_repository()
        .update_push_token(event.into())
        .await
        .map(|_| StatusCode::OK)
}
