use entity::prelude::GuildSettings as GuildSettingsEntity;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

use crate::data::GuildSettingsRepository;
use crate::model::settings::{DbDialect, GuildSettings};

mod get;
mod save;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Creates an in-memory database with the guild settings table.
async fn settings_db() -> DatabaseConnection {
    let test = TestBuilder::new()
        .with_table(GuildSettingsEntity)
        .build()
        .await
        .unwrap();
    test.db.unwrap()
}
