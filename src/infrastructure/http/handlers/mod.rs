//! HTTP Handlers

mod diagnostic;
mod miniapp;
mod root;
mod transfer;

pub use diagnostic::*;
pub use miniapp::*;
pub use root::*;
pub use transfer::*;
