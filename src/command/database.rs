//! The `database` admin command group: game-database connector management.

use serenity::all::{Context, CreateEmbed, Message};

use crate::bot::handler::Handler;
use crate::command::{author_is_admin, reply_embed, reply_text};
use crate::data::GuildSettingsRepository;
use crate::error::AppError;
use crate::model::settings::DbDialect;

/// Settings shown in clear text by `database current`. Everything else is
/// rendered redacted; an allow-list keeps additions redacted by default.
const VISIBLE_SETTINGS: &[&str] = &[
    "db_dialect",
    "db_driver",
    "db_host",
    "db_port",
    "db_user",
    "db_schema",
];

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    message: &Message,
    args: &str,
) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id.map(|id| id.get()) else {
        return Ok(());
    };

    if !author_is_admin(ctx, message) {
        reply_text(
            ctx,
            message,
            "You need administrator permissions to manage the database connector.",
        )
        .await?;
        return Ok(());
    }

    let mut parts = args.splitn(2, char::is_whitespace);
    let subcommand = parts.next().unwrap_or("");
    let value = parts.next().unwrap_or("").trim();

    let repo = GuildSettingsRepository::new(&handler.db);

    match subcommand {
        "reconnect" => {
            let settings = repo.get(guild_id).await?;
            handler.registry.recreate(guild_id, &settings).await?;
            reply_text(ctx, message, "Database connected.").await?;
        }
        "dialect" => match value.parse::<DbDialect>() {
            Ok(dialect) => {
                let mut settings = repo.get(guild_id).await?;
                settings.dialect = dialect;
                repo.save(guild_id, &settings).await?;
                reply_text(ctx, message, format!("Set database dialect to: `{dialect}`")).await?;
            }
            _ => {
                reply_text(
                    ctx,
                    message,
                    "Invalid dialect. Has to be one of `mysql`, `postgres`, `sqlite`.",
                )
                .await?;
            }
        },
        "driver" if !value.is_empty() => {
            let mut settings = repo.get(guild_id).await?;
            settings.driver = value.to_string();
            repo.save(guild_id, &settings).await?;
            reply_text(ctx, message, format!("Set database driver to: `{value}`")).await?;
        }
        "host" if !value.is_empty() => {
            let mut settings = repo.get(guild_id).await?;
            settings.host = value.to_string();
            repo.save(guild_id, &settings).await?;
            reply_text(ctx, message, format!("Database host set to: `{value}`")).await?;
        }
        "port" if !value.is_empty() => match value.parse::<u16>() {
            // Reserved ports stay off limits.
            Ok(port) if port >= 1024 => {
                let mut settings = repo.get(guild_id).await?;
                settings.port = port;
                repo.save(guild_id, &settings).await?;
                reply_text(ctx, message, format!("Database port set to: `{port}`")).await?;
            }
            _ => {
                reply_text(
                    ctx,
                    message,
                    format!("{value} is not a valid port! Use a port from 1024 to 65535."),
                )
                .await?;
            }
        },
        "username" | "user" if !value.is_empty() => {
            let mut settings = repo.get(guild_id).await?;
            settings.user = value.to_string();
            repo.save(guild_id, &settings).await?;
            reply_text(ctx, message, format!("User set to: `{value}`")).await?;
        }
        "password" if !value.is_empty() => {
            let mut settings = repo.get(guild_id).await?;
            settings.password = value.to_string();
            repo.save(guild_id, &settings).await?;
            reply_text(ctx, message, "Your password has been set.").await?;
            // The invoking message still carries the password.
            if message.delete(&ctx.http).await.is_err() {
                reply_text(
                    ctx,
                    message,
                    "I do not have the required permissions to delete messages, \
                     please remove/edit the password manually.",
                )
                .await?;
            }
        }
        "schema" | "database" if !value.is_empty() => {
            let mut settings = repo.get(guild_id).await?;
            settings.schema = value.to_string();
            repo.save(guild_id, &settings).await?;
            reply_text(ctx, message, format!("Database set to: `{value}`")).await?;
        }
        "current" | "settings" => {
            let settings = repo.get(guild_id).await?;
            reply_embed(ctx, message, current_settings_embed(&settings)).await?;
        }
        _ => {
            reply_text(
                ctx,
                message,
                format!(
                    "Usage: {}database <reconnect|dialect|driver|host|port|username|password\
                     |schema|current> [value]",
                    handler.prefix
                ),
            )
            .await?;
        }
    }

    Ok(())
}

/// Builds the settings overview, redacting every field not on the allow-list.
fn current_settings_embed(settings: &crate::model::settings::GuildSettings) -> CreateEmbed {
    let entries = [
        ("db_dialect", settings.dialect.to_string()),
        ("db_driver", settings.driver.clone()),
        ("db_host", settings.host.clone()),
        ("db_port", settings.port.to_string()),
        ("db_user", settings.user.clone()),
        ("db_password", settings.password.clone()),
        ("db_schema", settings.schema.clone()),
        (
            "verified_role",
            settings
                .verified_role
                .map_or_else(|| "None".to_string(), |id| id.to_string()),
        ),
        ("members_only", settings.members_only.to_string()),
    ];

    let mut embed = CreateEmbed::new().title("__Current settings:__");
    for (name, value) in entries {
        let shown = if VISIBLE_SETTINGS.contains(&name) {
            value
        } else {
            "`redacted`".to_string()
        };
        embed = embed.field(format!("{name}:"), shown, false);
    }
    embed
}
