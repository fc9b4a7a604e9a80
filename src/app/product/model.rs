//! 产品数据模型

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{
    error::ApiError,
    validation::{validate_name, NAME_REQUIRED},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category_id: i64,
}

// 创建产品请求
//
// 字段都保留原始 JSON 值，类型错误统一在 into_new_product 中报告，
// 这样价格错误不会被其他字段的反序列化错误掩盖。
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: Option<Value>,

    #[serde(default)]
    pub price: Option<Value>,

    #[serde(default)]
    pub category_id: Option<Value>,
}

/// 通过校验、可以写库的产品
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category_id: i64,
}

impl CreateProductRequest {
    /// 按顺序校验：价格、名称、分类
    ///
    /// 只做不需要访问数据库的检查，重名和分类存在性由服务层负责。
    pub fn into_new_product(self) -> Result<NewProduct, ApiError> {
        let price = parse_price(self.price.as_ref())?;
        let name = parse_name(self.name)?;
        let category_id = parse_category_id(self.category_id.as_ref())?;

        Ok(NewProduct {
            name,
            price,
            category_id,
        })
    }
}

/// 解析价格，接受 JSON 数字或可解析为有限数值的字符串
pub fn parse_price(value: Option<&Value>) -> Result<f64, ApiError> {
    let price = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match price {
        Some(p) if p.is_finite() => Ok(p),
        _ => Err(ApiError::InvalidPrice),
    }
}

fn parse_name(value: Option<Value>) -> Result<String, ApiError> {
    match value {
        None | Some(Value::Null) => Err(ApiError::Validation(NAME_REQUIRED.to_string())),
        Some(Value::String(name)) => {
            validate_name(&name).map_err(|_| ApiError::Validation(NAME_REQUIRED.to_string()))?;
            Ok(name)
        }
        Some(_) => Err(ApiError::Validation("Name must be a string".to_string())),
    }
}

/// 解析分类 id，接受 JSON 整数或整数字符串
fn parse_category_id(value: Option<&Value>) -> Result<i64, ApiError> {
    let id = match value {
        None | Some(Value::Null) => {
            return Err(ApiError::Validation("Category is required".to_string()))
        }
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };

    id.ok_or_else(|| ApiError::Validation("Category id must be an integer".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CreateProductRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_parse_price_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_price(Some(&json!(100))).unwrap(), 100.0);
        assert_eq!(parse_price(Some(&json!(19.99))).unwrap(), 19.99);
        assert_eq!(parse_price(Some(&json!("100"))).unwrap(), 100.0);
        assert_eq!(parse_price(Some(&json!(" 2.5 "))).unwrap(), 2.5);
    }

    #[test]
    fn test_parse_price_rejects_everything_else() {
        for value in [
            json!("invalid"),
            json!(""),
            json!("NaN"),
            json!("inf"),
            json!(true),
            json!(null),
            json!([1]),
            json!({"amount": 1}),
        ] {
            assert!(
                matches!(parse_price(Some(&value)), Err(ApiError::InvalidPrice)),
                "{value} should be rejected"
            );
        }
        assert!(matches!(parse_price(None), Err(ApiError::InvalidPrice)));
    }

    #[test]
    fn test_valid_request() {
        let product = request(json!({"name": "Widget", "price": "100", "category_id": 1}))
            .into_new_product()
            .unwrap();

        assert_eq!(
            product,
            NewProduct {
                name: "Widget".to_string(),
                price: 100.0,
                category_id: 1,
            }
        );
    }

    #[test]
    fn test_category_id_accepts_numeric_string() {
        let product = request(json!({"name": "Widget", "price": 100, "category_id": " 7 "}))
            .into_new_product()
            .unwrap();
        assert_eq!(product.category_id, 7);

        for bad in [json!("seven"), json!(1.5), json!(true), json!([1])] {
            let err = request(json!({"name": "Widget", "price": 100, "category_id": bad}))
                .into_new_product()
                .unwrap_err();
            assert_eq!(err.to_string(), "Category id must be an integer");
        }
    }

    #[test]
    fn test_invalid_price_reported_first() {
        for body in [
            json!({"name": "Invalid", "price": "invalid"}),
            json!({"name": "Invalid", "price": "invalid", "category_id": "1"}),
            json!({"name": null, "price": "invalid"}),
            json!({"name": 42, "price": "invalid", "category_id": {}}),
        ] {
            let err = request(body).into_new_product().unwrap_err();
            assert!(matches!(err, ApiError::InvalidPrice));
        }
    }

    #[test]
    fn test_missing_category() {
        for body in [
            json!({"name": "Widget", "price": 5}),
            json!({"name": "Widget", "price": 5, "category_id": null}),
        ] {
            let err = request(body).into_new_product().unwrap_err();
            assert_eq!(err.to_string(), "Category is required");
        }
    }

    #[test]
    fn test_blank_or_mistyped_name() {
        for body in [
            json!({"price": 5, "category_id": 1}),
            json!({"name": null, "price": 5, "category_id": 1}),
            json!({"name": "", "price": 5, "category_id": 1}),
            json!({"name": "   ", "price": 5, "category_id": 1}),
        ] {
            let err = request(body).into_new_product().unwrap_err();
            assert_eq!(err.to_string(), "Name is required");
        }

        let err = request(json!({"name": 42, "price": 5, "category_id": 1}))
            .into_new_product()
            .unwrap_err();
        assert_eq!(err.to_string(), "Name must be a string");
    }
}
