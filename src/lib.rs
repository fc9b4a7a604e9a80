//! # 产品目录服务
//!
//! 基于 Axum + SQLx (SQLite) 的产品/分类管理接口：
//! - `app`：路由、处理器、业务服务与数据模型
//! - `core`：统一错误处理与请求日志中间件
//! - `infrastructure`：数据库连接池与日志初始化
//! - `config`：TOML 配置加载

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{create_routes, AppState};
pub use config::Config;
pub use crate::core::ApiError;
