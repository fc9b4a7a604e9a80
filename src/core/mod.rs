//! 核心层：错误处理、字段校验与中间件

pub mod error;
pub mod middleware;
pub mod validation;

pub use error::ApiError;
