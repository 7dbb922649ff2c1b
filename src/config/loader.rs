//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 部署平台约定的环境变量（DATABASE_URL / DATABASE_NAME / PORT）
//! 2. 前缀环境变量（MINIAPP_）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 平台约定的环境变量 -> 配置键
const PLAIN_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("DATABASE_URL", "database.url"),
    ("DATABASE_NAME", "database.name"),
    ("PORT", "server.port"),
];

/// 加载应用配置
///
/// # 环境变量示例
/// - `PORT=8080`
/// - `DATABASE_URL=/var/lib/miniapp`
/// - `DATABASE_NAME=store`
/// - `MINIAPP_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let overrides = PLAIN_ENV_OVERRIDES
        .iter()
        .map(|(var, key)| (*key, std::env::var(var).ok()))
        .collect::<Vec<_>>();
    load_config_with(None, &overrides)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
/// - `overrides` - 最高优先级的键值覆盖，值为 None 时忽略
pub fn load_config_with(
    config_path: Option<&Path>,
    overrides: &[(&str, Option<String>)],
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量
    // 例如: MINIAPP_SERVER__HOST=127.0.0.1
    builder = builder.add_source(
        Environment::with_prefix("MINIAPP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 平台环境变量（最高优先级）
    for (key, value) in overrides {
        builder = builder.set_override_option(*key, value.clone())?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.host.is_empty() {
        return Err(ConfigError::ValidationError(
            "Server host cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!(
        "Database URL: {}",
        if config.database.url_is_set() { "set" } else { "not set" }
    );
    tracing::info!(
        "Database Name: {}",
        config.database.name.as_deref().unwrap_or("not set")
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("Log JSON: {}", config.log.json);
    tracing::info!("=================================");
}
