use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{
        event::{CreateUser, UpdatePushToken},
        User,
    },
};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, VariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum RoleName {
    Admin,
    TeamLeader,
    Member,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => Self::Admin,
            Role::TeamLeader => Self::TeamLeader,
            Role::Member => Self::Member,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Admin => Self::Admin,
            RoleName::TeamLeader => Self::TeamLeader,
            RoleName::Member => Self::Member,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub items: Vec<UserResponse>,
}

impl From<Vec<User>> for UsersResponse {
    fn from(value: Vec<User>) -> Self {
        Self {
            items: value.into_iter().map(UserResponse::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub username: String,
    pub role: RoleName,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            username,
            role,
            ..
        } = value;
        Self {
            user_id,
            username,
            role: RoleName::from(role),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(length(min = 1))]
    pub password: String,
    #[garde(skip)]
    pub role: RoleName,
    #[garde(inner(email))]
    pub email: Option<String>,
    #[garde(skip)]
    pub phone: Option<String>,
    #[garde(skip)]
    pub push_token: Option<String>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            username,
            password,
            role,
            email,
            phone,
            push_token,
        } = value;
        Self {
            username,
            password,
            role: Role::from(role),
            email,
            phone,
            push_token,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePushTokenRequest {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(length(min = 1))]
    pub push_token: String,
}

#[derive(new)]
pub struct UpdatePushTokenRequestWithUserId(UserId, UpdatePushTokenRequest);

impl From<UpdatePushTokenRequestWithUserId> for UpdatePushToken {
    fn from(value: UpdatePushTokenRequestWithUserId) -> Self {
        let UpdatePushTokenRequestWithUserId(
            user_id,
            UpdatePushTokenRequest { push_token, .. },
        ) = value;
        UpdatePushToken {
            user_id,
            push_token,
        }
    }
}
