//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod miniapp_commands;
mod transfer_commands;

pub mod handlers;

pub use miniapp_commands::*;
pub use transfer_commands::*;
