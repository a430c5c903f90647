pub mod prelude;

pub mod account_link;
pub mod guild_settings;
