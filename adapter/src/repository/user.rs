use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::id::UserId;
use kernel::model::user::{
    event::{CreateUser, UpdatePushToken},
    User,
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    // ユーザーを新規登録する
    async fn create(&self, event: CreateUser) -> AppResult<UserId> {
        let user_id = UserId::new();
        let hashed_password = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;

        // ユーザー名の一意性は事前の SELECT では確認しない
        // 同名ユーザーの同時登録は UNIQUE 制約の違反として検出する
        let res = sqlx::query(
            r#"
                INSERT INTO users
                (user_id, username, password_hash, role, email, phone, push_token, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ;
            "#,
        )
        .bind(user_id.as_str())
        .bind(&event.username)
        .bind(hashed_password)
        .bind(event.role.to_string())
        .bind(&event.email)
        .bind(&event.phone)
        .bind(&event.push_token)
        .bind(Utc::now())
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::UniqueConstraintViolationError(format!(
                    "ユーザー名（{}）はすでに使用されています。",
                    event.username
                ))
            }
            e => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            ));
        }

        Ok(user_id)
    }

    // ユーザー名からユーザーを取得する（大文字小文字を区別しない）
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT
                user_id,
                username,
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

        row.map(User::try_from).transpose()
    }

    // すべてのユーザーを取得する
    async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, UserRow>(
            r#"
                SELECT
                user_id,
                username,
                role,
                email,
                phone,
                push_token
                FROM users
                ORDER BY username ASC
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(User::try_from)
        .collect()
    }

    // プッシュ通知トークンを更新する
    async fn update_push_token(&self, event: UpdatePushToken) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET
                    push_token = $1
                WHERE user_id = $2
            "#,
        )
        .bind(&event.push_token)
        .bind(event.user_id.as_str())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified user not found".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::role::Role;

    #[sqlx::test]
    async fn register_and_look_up_user(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let user_id = repo
            .create(CreateUser::new(
                "Alice".into(),
                "passw0rd".into(),
                Role::TeamLeader,
                Some("alice@example.com".into()),
                None,
                None,
            ))
            .await?;

        // ユーザー名の検索は大文字小文字を区別しない
        let user = repo.find_by_username("alice").await?.unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.username, "Alice");
        assert_eq!(user.role, Role::TeamLeader);
        assert_eq!(user.email.as_deref(), Some("alice@example.com"));

        assert!(repo.find_by_username("carol").await?.is_none());

        Ok(())
    }

    #[sqlx::test]
    async fn duplicate_username_is_rejected_by_the_store(
        pool: sqlx::SqlitePool,
    ) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateUser::new(
            "alice".into(),
            "passw0rd".into(),
            Role::Member,
            None,
            None,
            None,
        ))
        .await?;

        // 大文字小文字だけが異なる名前も重複とみなす
        let res = repo
            .create(CreateUser::new(
                "ALICE".into(),
                "passw0rd".into(),
                Role::Member,
                None,
                None,
                None,
            ))
            .await;
        assert!(matches!(
            res,
            Err(AppError::UniqueConstraintViolationError(_))
        ));

        Ok(())
    }

    #[sqlx::test]
    async fn push_token_can_be_replaced(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let user_id = repo
            .create(CreateUser::new(
                "bob".into(),
                "passw0rd".into(),
                Role::Member,
                None,
                None,
                Some("token-1".into()),
            ))
            .await?;

        repo.update_push_token(UpdatePushToken::new(user_id, "token-2".into()))
            .await?;

        let user = repo.find_by_username("bob").await?.unwrap();
        assert_eq!(user.push_token.as_deref(), Some("token-2"));

        let res = repo
            .update_push_token(UpdatePushToken::new(UserId::new(), "token-3".into()))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        Ok(())
    }
}
