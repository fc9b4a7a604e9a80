//! 数据库基础设施

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Error,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;

pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // 内存数据库每个连接都是独立的库，只能保留一个常驻连接
        let pool = if is_memory_url(&config.url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(Duration::from_secs(8))
                .connect_with(options)
                .await?
        };

        info!("Connected to database: {}", config.url);

        let manager = Self { pool };
        manager.create_tables().await?;
        Ok(manager)
    }

    /// 打开一个全新的内存数据库，测试使用
    pub async fn in_memory() -> Result<Self, Error> {
        Self::new(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        })
        .await
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// 创建数据库表（不做迁移，仅保证表存在）
    pub async fn create_tables(&self) -> Result<(), Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS category (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS product (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                price REAL NOT NULL,
                category_id INTEGER NOT NULL REFERENCES category (id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_memory_url() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite://file:catalog?mode=memory"));
        assert!(!is_memory_url("sqlite://catalog.db"));
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() {
        let db = DatabaseManager::in_memory().await.unwrap();
        db.create_tables().await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('category', 'product') ORDER BY name",
        )
        .fetch_all(db.get_pool())
        .await
        .unwrap();

        assert_eq!(
            tables,
            vec![("category".to_string(),), ("product".to_string(),)]
        );
    }
}
