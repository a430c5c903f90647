//! Database repository layer.
//!
//! Repositories build statements from entity models, run them through the
//! appropriate connection (the guild's game-database gateway for link
//! records, the bot's own database for settings), and convert entity models
//! to domain models at the boundary.

pub mod account_link;
pub mod settings;

pub use account_link::AccountLinkRepository;
pub use settings::GuildSettingsRepository;

#[cfg(test)]
mod test;
