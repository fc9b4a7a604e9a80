//! 分类业务服务

use sqlx::SqlitePool;
use tracing::info;

use super::model::Category;
use crate::core::error::{ApiError, CATEGORY_NOT_FOUND};

#[derive(Clone)]
pub struct CategoryService {
    db: SqlitePool,
}

impl CategoryService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM category ORDER BY id")
                .fetch_all(&self.db)
                .await?;

        Ok(categories)
    }

    pub async fn get_category(&self, id: i64) -> Result<Category, ApiError> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or(ApiError::NotFound(CATEGORY_NOT_FOUND))
    }

    pub async fn create_category(&self, name: &str) -> Result<Category, ApiError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO category (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.db)
        .await?;

        info!("Created category: {} ({})", category.name, category.id);

        Ok(category)
    }
}
