//! Configuration Module
//!
//! 提供应用配置管理功能，支持多层级配置来源：
//! - 平台环境变量（DATABASE_URL / DATABASE_NAME / PORT）
//! - 前缀环境变量（MINIAPP_）
//! - 配置文件（TOML 格式）
//! - 默认值

mod loader;
mod types;

pub use loader::{load_config, load_config_with, print_config, ConfigError};
pub use types::{AppConfig, DatabaseConfig, LogConfig, ServerConfig};
