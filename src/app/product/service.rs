//! 产品业务服务

use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

use super::model::{NewProduct, Product};
use crate::core::error::{ApiError, PRODUCT_NOT_FOUND};

#[derive(Clone)]
pub struct ProductService {
    db: SqlitePool,
}

impl ProductService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, category_id FROM product ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(products)
    }

    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price, category_id FROM product WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(ApiError::NotFound(PRODUCT_NOT_FOUND))
    }

    /// 创建产品
    ///
    /// 重名检查、分类检查与插入在同一个 `BEGIN IMMEDIATE` 事务内完成：
    /// 事务开始即持有写锁，并发创建按顺序执行，任何一步失败都不会写入。
    pub async fn create_product(&self, new: NewProduct) -> Result<Product, ApiError> {
        let mut conn = self.db.acquire().await?;

        sqlx::query("BEGIN IMMEDIATE").execute(&mut *conn).await?;
        let result = insert_product(&mut *conn, &new).await;
        let finish = if result.is_ok() { "COMMIT" } else { "ROLLBACK" };
        sqlx::query(finish).execute(&mut *conn).await?;

        let product = result?;
        info!("Created product: {} ({})", product.name, product.id);

        Ok(product)
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM product WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(PRODUCT_NOT_FOUND));
        }

        info!("Deleted product: {}", id);

        Ok(())
    }
}

async fn insert_product(
    conn: &mut SqliteConnection,
    new: &NewProduct,
) -> Result<Product, ApiError> {
    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM product WHERE name = ?")
        .bind(&new.name)
        .fetch_optional(&mut *conn)
        .await?;

    if existing.is_some() {
        return Err(ApiError::DuplicateName);
    }

    let category: Option<(i64,)> = sqlx::query_as("SELECT id FROM category WHERE id = ?")
        .bind(new.category_id)
        .fetch_optional(&mut *conn)
        .await?;

    if category.is_none() {
        return Err(ApiError::UnknownCategory);
    }

    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO product (name, price, category_id) VALUES (?, ?, ?) RETURNING id, name, price, category_id",
    )
    .bind(&new.name)
    .bind(new.price)
    .bind(new.category_id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(product)
}
