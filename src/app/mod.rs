//! 应用层：路由与各业务模块

pub mod category;
pub mod product;

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::{error::ApiError, middleware::request_logging_middleware};
use category::{handler as category_handler, service::CategoryService};
use product::{handler as product_handler, service::ProductService};

// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub product_service: ProductService,
    pub category_service: CategoryService,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            product_service: ProductService::new(db.clone()),
            category_service: CategoryService::new(db.clone()),
            db,
        }
    }
}

// 健康检查
async fn health_check(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    sqlx::query("SELECT 1").execute(&state.db).await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": chrono::Utc::now()
    })))
}

// 创建路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/products",
            get(product_handler::list_products).post(product_handler::create_product),
        )
        .route(
            "/products/:id",
            get(product_handler::get_product).delete(product_handler::delete_product),
        )
        .route(
            "/categories",
            get(category_handler::list_categories).post(category_handler::create_category),
        )
        .route("/categories/:id", get(category_handler::get_category))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}
