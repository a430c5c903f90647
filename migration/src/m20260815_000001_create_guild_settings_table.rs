use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildSettings::Table)
                    .if_not_exists()
                    .col(big_integer(GuildSettings::GuildId).primary_key())
                    .col(string(GuildSettings::DbDialect))
                    .col(string(GuildSettings::DbDriver))
                    .col(string(GuildSettings::DbHost))
                    .col(integer(GuildSettings::DbPort))
                    .col(string(GuildSettings::DbUser))
                    .col(string(GuildSettings::DbPassword))
                    .col(string(GuildSettings::DbSchema))
                    .col(big_integer_null(GuildSettings::VerifiedRole))
                    .col(boolean(GuildSettings::MembersOnly))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum GuildSettings {
    Table,
    GuildId,
    DbDialect,
    DbDriver,
    DbHost,
    DbPort,
    DbUser,
    DbPassword,
    DbSchema,
    VerifiedRole,
    MembersOnly,
}
