//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod miniapp_queries;
mod store_queries;
mod transfer_queries;

pub mod handlers;

pub use miniapp_queries::*;
pub use store_queries::*;
pub use transfer_queries::*;
