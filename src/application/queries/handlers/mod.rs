//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod miniapp_handlers;
mod store_handlers;
mod transfer_handlers;

pub use miniapp_handlers::*;
pub use store_handlers::*;
pub use transfer_handlers::*;
