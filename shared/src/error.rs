use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("日付のフォーマットが不正です。YYYY-MM-DD 形式で指定してください。")]
    ConvertToDateError(#[from] chrono::ParseError),
    #[error("{0}")]
    UniqueConstraintViolationError(String),
    #[error("トランザクションを実行できませんでした。")]
    TransactionError(#[source] sqlx::Error),
    #[error("データベース処理の実行中にエラーが発生しました。")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("マイグレーションの実行に失敗しました。")]
    MigrateError(#[source] sqlx::migrate::MigrateError),
    #[error("No rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("ログインに失敗しました。")]
    UnauthenticatedError,
    #[error("許可されていない操作です。")]
    ForbiddenOperation,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) | AppError::ConvertToDateError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UniqueConstraintViolationError(_) => StatusCode::CONFLICT,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::MigrateError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::BcryptError(_)
            | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_maps_to_status_code() {
        assert_eq!(
            AppError::EntityNotFound("assigner".into())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::UniqueConstraintViolationError("username".into())
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::NoRowsAffectedError("no task".into())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn date_parse_failure_is_a_client_error() {
        let res: Result<chrono::NaiveDate, _> =
            chrono::NaiveDate::parse_from_str("03-01-2025", "%Y-%m-%d");
        let err = AppError::from(res.unwrap_err());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
