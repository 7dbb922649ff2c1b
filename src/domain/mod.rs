//! Domain Layer - 领域层
//!
//! 包含两类记录:
//! - MiniApp: 小程序商店条目
//! - TransferLog: 转账日志
//!
//! 以及共享的 schema 校验

pub mod miniapp;
pub mod schema;
pub mod transfer;

pub use miniapp::MiniApp;
pub use schema::{validate, FieldViolation, SchemaError};
pub use transfer::TransferLog;
