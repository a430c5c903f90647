//! Guild settings repository over the bot's own database.

use migration::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::error::AppError;
use crate::model::settings::GuildSettings;

/// Repository providing persistence for per-guild settings.
pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the settings for a guild, falling back to defaults when the
    /// guild has never been configured.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Stored or default settings
    /// - `Err(AppError)` - Database error, or a stored row with an invalid
    ///   dialect or port
    pub async fn get(&self, guild_id: u64) -> Result<GuildSettings, AppError> {
        let row = entity::prelude::GuildSettings::find_by_id(guild_id as i64)
            .one(self.db)
            .await?;

        match row {
            Some(model) => GuildSettings::from_entity(model),
            None => Ok(GuildSettings::default()),
        }
    }

    /// Upserts the full settings row for a guild.
    pub async fn save(&self, guild_id: u64, settings: &GuildSettings) -> Result<(), DbErr> {
        use entity::guild_settings::Column;

        entity::prelude::GuildSettings::insert(settings.into_active_model(guild_id))
            .on_conflict(
                OnConflict::column(Column::GuildId)
                    .update_columns([
                        Column::DbDialect,
                        Column::DbDriver,
                        Column::DbHost,
                        Column::DbPort,
                        Column::DbUser,
                        Column::DbPassword,
                        Column::DbSchema,
                        Column::VerifiedRole,
                        Column::MembersOnly,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
