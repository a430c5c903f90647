use super::*;

/// Tests persisting and reloading a full settings row.
///
/// Expected: the reloaded settings equal the saved ones
#[tokio::test]
async fn saves_and_reloads_settings() -> TestResult {
    let db = settings_db().await;
    let repo = GuildSettingsRepository::new(&db);

    let settings = GuildSettings {
        dialect: DbDialect::Postgres,
        driver: "sqlx".to_string(),
        host: "db.example.net".to_string(),
        port: 5432,
        user: "gamebot".to_string(),
        password: "hunter2".to_string(),
        schema: "game".to_string(),
        verified_role: Some(987654321),
        members_only: true,
    };

    repo.save(1234, &settings).await?;
    let reloaded = repo.get(1234).await?;

    assert_eq!(reloaded, settings);

    Ok(())
}

/// Tests that saving twice updates the existing row instead of duplicating.
///
/// Expected: one stored row carrying the latest values
#[tokio::test]
async fn upserts_existing_row() -> TestResult {
    let db = settings_db().await;
    let repo = GuildSettingsRepository::new(&db);

    let mut settings = GuildSettings::default();
    repo.save(1234, &settings).await?;

    settings.port = 3307;
    settings.members_only = true;
    repo.save(1234, &settings).await?;

    let count = GuildSettingsEntity::find().count(&db).await?;
    let reloaded = repo.get(1234).await?;

    assert_eq!(count, 1);
    assert_eq!(reloaded.port, 3307);
    assert!(reloaded.members_only);

    Ok(())
}
