use anyhow::Result;

pub struct AppConfig {
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            filename: std::env::var("DATABASE_FILENAME")
                .unwrap_or_else(|_| "taskhub.db".into()),
        };
        Ok(Self { database })
    }
}

/// SQLite データベースファイルへの接続設定
pub struct DatabaseConfig {
    pub filename: String,
}
