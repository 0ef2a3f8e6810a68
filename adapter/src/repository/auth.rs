use crate::database::{model::user::UserCredentialRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::user::User;
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    // ユーザー名とパスワードを検証する
    async fn verify_user(&self, username: &str, password: &str) -> AppResult<User> {
        let row = sqlx::query_as::<_, UserCredentialRow>(
            r#"
                SELECT
                user_id,
                username,
                password_hash,
                role,
                email,
                phone,
                push_token
                FROM users
                WHERE username = $1 COLLATE NOCASE
                ;
            "#,
        )
        .bind(username)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Err(AppError::EntityNotFound(format!(
                "ユーザー（{username}）が見つかりませんでした。"
            )));
        };

        let valid = bcrypt::verify(password, &row.password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }

        row.into_user()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::model::role::Role;
    use kernel::model::user::event::CreateUser;
    use kernel::repository::user::UserRepository;

    #[sqlx::test]
    async fn verify_user_checks_the_stored_hash(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let user_repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        user_repo
            .create(CreateUser::new(
                "alice".into(),
                "correct horse".into(),
                Role::Member,
                None,
                None,
                None,
            ))
            .await?;

        let repo = AuthRepositoryImpl::new(ConnectionPool::new(pool));

        let user = repo.verify_user("alice", "correct horse").await?;
        assert_eq!(user.username, "alice");

        let res = repo.verify_user("alice", "wrong").await;
        assert!(matches!(res, Err(AppError::UnauthenticatedError)));

        let res = repo.verify_user("nobody", "correct horse").await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        Ok(())
    }
}
