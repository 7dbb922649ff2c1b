//! MiniApp Context - 小程序商店条目

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{self, validate_http_url, SchemaError};

/// 集合名
pub const COLLECTION: &str = "miniapp";

/// 列表接口固定返回上限
pub const LIST_LIMIT: usize = 100;

/// 提交到商店的小程序
///
/// 不变量:
/// - name 2-80 字符
/// - description 10-300 字符
/// - url / icon 为合法的 http(s) URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MiniApp {
    /// 名称
    #[validate(length(min = 2, max = 80, message = "name must be between 2 and 80 characters"))]
    pub name: String,

    /// 简介
    #[validate(length(
        min = 10,
        max = 300,
        message = "description must be between 10 and 300 characters"
    ))]
    pub description: String,

    /// 打开小程序的公开 URL
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,

    /// 图标 URL
    #[validate(custom(function = "validate_http_url"))]
    pub icon: Option<String>,

    /// 作者（钱包地址或昵称）
    pub author: Option<String>,

    /// 标签
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MiniApp {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
            icon: None,
            author: None,
            tags: Vec::new(),
        }
    }

    /// 按 schema 校验
    pub fn validated(self) -> Result<Self, SchemaError> {
        schema::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin_flip() -> MiniApp {
        MiniApp::new("Coin Flip", "Flip a coin and win tokens", "https://example.com/app")
    }

    #[test]
    fn test_valid_miniapp() {
        let app = coin_flip().validated().unwrap();
        assert_eq!(app.name, "Coin Flip");
        assert!(app.tags.is_empty());
    }

    #[test]
    fn test_name_too_short() {
        let mut app = coin_flip();
        app.name = "X".to_string();
        let err = app.validated().unwrap_err();
        assert!(err.has_field("name"));
    }

    #[test]
    fn test_name_too_long() {
        let mut app = coin_flip();
        app.name = "n".repeat(81);
        assert!(app.validated().is_err());
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        let mut app = coin_flip();
        // 80 个多字节字符
        app.name = "币".repeat(80);
        assert!(app.validated().is_ok());
    }

    #[test]
    fn test_description_bounds() {
        let mut app = coin_flip();
        app.description = "too short".to_string();
        let err = app.clone().validated().unwrap_err();
        assert!(err.has_field("description"));

        app.description = "d".repeat(301);
        assert!(app.clone().validated().is_err());

        app.description = "d".repeat(300);
        assert!(app.validated().is_ok());
    }

    #[test]
    fn test_invalid_urls() {
        let mut app = coin_flip();
        app.url = "not-a-url".to_string();
        assert!(app.validated().unwrap_err().has_field("url"));

        let mut app = coin_flip();
        app.icon = Some("ftp://example.com/icon.png".to_string());
        assert!(app.validated().unwrap_err().has_field("icon"));

        let mut app = coin_flip();
        app.icon = Some("https://example.com/icon.png".to_string());
        assert!(app.validated().is_ok());
    }

    #[test]
    fn test_reports_every_failing_field() {
        let app = MiniApp::new("X", "short", "nope");
        let err = app.validated().unwrap_err();
        assert_eq!(err.violations.len(), 3);
        assert!(err.to_string().starts_with("description:"));
    }

    #[test]
    fn test_deserialize_defaults_tags() {
        let app: MiniApp = serde_json::from_value(serde_json::json!({
            "name": "Coin Flip",
            "description": "Flip a coin and win tokens",
            "url": "https://example.com/app"
        }))
        .unwrap();
        assert!(app.tags.is_empty());
        assert!(app.icon.is_none());
    }
}
