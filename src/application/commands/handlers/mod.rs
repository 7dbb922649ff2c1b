//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod miniapp_handlers;
mod transfer_handlers;

pub use miniapp_handlers::*;
pub use transfer_handlers::*;
