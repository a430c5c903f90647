use super::*;

/// Tests loading settings for a guild that was never configured.
///
/// Expected: Ok(GuildSettings) equal to the documented defaults
#[tokio::test]
async fn returns_defaults_for_unconfigured_guild() -> TestResult {
    let db = settings_db().await;
    let repo = GuildSettingsRepository::new(&db);

    let settings = repo.get(1234).await?;

    assert_eq!(settings, GuildSettings::default());

    Ok(())
}

/// Tests loading settings scoped to the requesting guild only.
///
/// Expected: each guild sees its own stored values
#[tokio::test]
async fn scopes_settings_to_the_guild() -> TestResult {
    let db = settings_db().await;
    let repo = GuildSettingsRepository::new(&db);

    let mut custom = GuildSettings::default();
    custom.host = "db.example.net".to_string();
    repo.save(1111, &custom).await?;

    let configured = repo.get(1111).await?;
    let untouched = repo.get(2222).await?;

    assert_eq!(configured.host, "db.example.net");
    assert_eq!(untouched, GuildSettings::default());

    Ok(())
}

/// Tests loading a stored row with a dialect the connector cannot speak.
///
/// Expected: Err, surfaced instead of silently falling back to defaults
#[tokio::test]
async fn surfaces_invalid_stored_dialect() -> TestResult {
    let db = settings_db().await;

    entity::guild_settings::ActiveModel {
        guild_id: ActiveValue::Set(1234),
        db_dialect: ActiveValue::Set("oracle".to_string()),
        db_driver: ActiveValue::Set("sqlx".to_string()),
        db_host: ActiveValue::Set("127.0.0.1".to_string()),
        db_port: ActiveValue::Set(3306),
        db_user: ActiveValue::Set("ss13".to_string()),
        db_password: ActiveValue::Set("password".to_string()),
        db_schema: ActiveValue::Set("feedback".to_string()),
        verified_role: ActiveValue::Set(None),
        members_only: ActiveValue::Set(false),
    }
    .insert(&db)
    .await?;

    let repo = GuildSettingsRepository::new(&db);
    let result = repo.get(1234).await;

    assert!(result.is_err());

    Ok(())
}
