//! 请求字段校验

use std::borrow::Cow;
use validator::ValidationError;

pub const NAME_REQUIRED: &str = "Name is required";

/// 名称去掉首尾空白后不能为空
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed(NAME_REQUIRED));
        return Err(error);
    }
    Ok(())
}
