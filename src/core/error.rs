//! 核心错误处理模块

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const CATEGORY_NOT_FOUND: &str = "Category not found";

/// 接口错误类型
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Product with this name already exists")]
    DuplicateName,
    #[error("Price must be a number")]
    InvalidPrice,
    #[error("{0}")]
    NotFound(&'static str),
    #[error("Category not found")]
    UnknownCategory,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::DuplicateName
            | ApiError::InvalidPrice
            | ApiError::UnknownCategory
            | ApiError::Validation(_)
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Database(e) => {
                error!("Database error: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        // product.name 是唯一的 UNIQUE 约束，category_id 是唯一的外键
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => ApiError::DuplicateName,
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => ApiError::UnknownCategory,
            _ => ApiError::Database(err),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(_, errors)| {
                errors.iter().map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| "Validation error".to_string())
                })
            })
            .collect();
        messages.sort();

        ApiError::Validation(messages.join(", "))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::DatabaseManager;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::DuplicateName.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidPrice.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::UnknownCategory.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::NotFound(PRODUCT_NOT_FOUND).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_are_fixed() {
        assert_eq!(
            ApiError::DuplicateName.to_string(),
            "Product with this name already exists"
        );
        assert_eq!(ApiError::InvalidPrice.to_string(), "Price must be a number");
        assert_eq!(
            ApiError::NotFound(PRODUCT_NOT_FOUND).to_string(),
            "Product not found"
        );
    }

    #[test]
    fn test_row_not_found_is_internal() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, ApiError::Database(_)));
    }

    // 绕过服务层直接写库，验证约束错误的映射
    #[tokio::test]
    async fn test_constraint_violations_map_to_client_errors() {
        let db = DatabaseManager::in_memory().await.unwrap();
        let pool = db.get_pool();

        let (category_id,): (i64,) =
            sqlx::query_as("INSERT INTO category (name) VALUES ('TestCategory') RETURNING id")
                .fetch_one(pool)
                .await
                .unwrap();

        let err = sqlx::query("INSERT INTO product (name, price, category_id) VALUES ('Orphan', 1.0, ?)")
            .bind(category_id + 100)
            .execute(pool)
            .await
            .unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::UnknownCategory));

        sqlx::query("INSERT INTO product (name, price, category_id) VALUES ('Duplicate', 1.0, ?)")
            .bind(category_id)
            .execute(pool)
            .await
            .unwrap();
        let err = sqlx::query("INSERT INTO product (name, price, category_id) VALUES ('Duplicate', 2.0, ?)")
            .bind(category_id)
            .execute(pool)
            .await
            .unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::DuplicateName));
    }
}
