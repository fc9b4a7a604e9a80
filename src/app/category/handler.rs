//! 分类处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use validator::Validate;

use super::model::{Category, CreateCategoryRequest};
use crate::app::AppState;
use crate::core::error::ApiError;

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.category_service.list_categories().await?;
    Ok(Json(categories))
}

pub async fn get_category(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Category>, ApiError> {
    let Path(id) = id?;
    let category = state.category_service.get_category(id).await?;
    Ok(Json(category))
}

pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let category = state.category_service.create_category(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
