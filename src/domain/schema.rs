//! Schema Validation
//!
//! 记录入库前的字段约束校验，纯函数，无副作用

use std::borrow::Cow;

use thiserror::Error;
use url::Url;
use validator::{Validate, ValidationError, ValidationErrors};

/// URL 最大长度（与常见浏览器限制一致）
pub const MAX_URL_LENGTH: usize = 2083;

/// 单个字段的约束违反
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// 校验错误 - 列出所有未通过的字段
#[derive(Debug, Clone, Error)]
#[error("{}", describe(.violations))]
pub struct SchemaError {
    pub violations: Vec<FieldViolation>,
}

impl SchemaError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    /// 是否包含指定字段的错误
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationErrors> for SchemaError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| FieldViolation {
                    field: field.clone(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();

        // HashMap 无序，按字段名排序保证消息稳定
        violations.sort_by(|a, b| a.field.cmp(&b.field));

        Self { violations }
    }
}

/// 校验记录，通过则原样返回
pub fn validate<T: Validate>(record: T) -> Result<T, SchemaError> {
    record.validate()?;
    Ok(record)
}

/// 校验 http/https URL
///
/// 要求：可解析的绝对 URL、scheme 为 http 或 https、host 非空、长度不超过 2083
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_URL_LENGTH {
        return Err(url_error(format!(
            "URL must be at most {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed = Url::parse(value).map_err(|e| url_error(format!("invalid URL: {}", e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(url_error(format!(
            "URL scheme should be 'http' or 'https', got '{}'",
            parsed.scheme()
        )));
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(url_error("URL must have a host".to_string()));
    }

    Ok(())
}

fn url_error(message: String) -> ValidationError {
    let mut err = ValidationError::new("url");
    err.message = Some(Cow::Owned(message));
    err
}
