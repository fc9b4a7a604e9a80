//! 分类数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::validation::validate_name;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

// 创建分类请求
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
}
