//! Discord bot event handlers and startup.

pub mod handler;
pub mod start;
