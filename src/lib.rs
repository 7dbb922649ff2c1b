//! Mini App Store - 小程序商店与转账日志服务
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - MiniApp / TransferLog 记录及 schema 校验
//!
//! 应用层 (application/):
//! - Ports: DocumentStore 端口
//! - Commands: 创建小程序、记录转账
//! - Queries: 列表查询、存储诊断
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: Sled 文档存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
