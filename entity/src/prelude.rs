pub use super::account_link::Entity as AccountLink;
pub use super::guild_settings::Entity as GuildSettings;
