//! The `link` admin command group: linking workflow preferences.

use serenity::all::{Context, GuildId, Message, RoleId};

use crate::bot::handler::Handler;
use crate::command::{author_is_admin, reply_text};
use crate::data::GuildSettingsRepository;
use crate::error::AppError;

/// Requested change to the verified role setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleArg {
    /// Remove the configured role.
    Clear,
    /// Set the configured role to this id.
    Id(u64),
}

/// Outcome of a verified-role update, resolved with explicit guard clauses
/// rather than exception branches.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RoleUpdate {
    /// The requested role does not exist in the guild.
    NotFound,
    /// The requested role is already the configured one.
    AlreadySet(String),
    /// The configured role was removed.
    Cleared,
    /// The configured role was changed to the named role.
    Set(String),
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    message: &Message,
    args: &str,
) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };

    if !author_is_admin(ctx, message) {
        reply_text(
            ctx,
            message,
            "You need administrator permissions to manage link preferences.",
        )
        .await?;
        return Ok(());
    }

    let mut parts = args.splitn(2, char::is_whitespace);
    let subcommand = parts.next().unwrap_or("");
    let value = parts.next().unwrap_or("").trim();

    let repo = GuildSettingsRepository::new(&handler.db);

    match subcommand {
        "membersonly" => {
            let mut settings = repo.get(guild_id.get()).await?;
            settings.members_only = !settings.members_only;
            repo.save(guild_id.get(), &settings).await?;
            reply_text(
                ctx,
                message,
                format!(
                    "Guild member restricted server entry is now {}",
                    if settings.members_only {
                        "enabled"
                    } else {
                        "disabled"
                    }
                ),
            )
            .await?;
        }
        "verifiedrole" => {
            update_verified_role(handler, ctx, message, guild_id, value).await?;
        }
        _ => {
            reply_text(
                ctx,
                message,
                format!(
                    "Usage: {}link <membersonly|verifiedrole> [role id]",
                    handler.prefix
                ),
            )
            .await?;
        }
    }

    Ok(())
}

async fn update_verified_role(
    handler: &Handler,
    ctx: &Context,
    message: &Message,
    guild_id: GuildId,
    value: &str,
) -> Result<(), AppError> {
    let repo = GuildSettingsRepository::new(&handler.db);
    let mut settings = repo.get(guild_id.get()).await?;

    // Bare invocation shows the current setting.
    if value.is_empty() {
        let reply = match settings.verified_role.map(|id| role_name(ctx, guild_id, id)) {
            Some(Some(name)) => format!("Current verified role: `{name}`"),
            Some(None) => "The configured verified role no longer exists.".to_string(),
            None => "No verified role set.".to_string(),
        };
        reply_text(ctx, message, reply).await?;
        return Ok(());
    }

    let arg = match parse_role_arg(value) {
        Some(arg) => arg,
        None => {
            reply_text(
                ctx,
                message,
                "That doesn't look like a role id. Pass a role id, or `-1` to clear.",
            )
            .await?;
            return Ok(());
        }
    };

    let update = apply_role_update(settings.verified_role, arg, |id| role_name(ctx, guild_id, id));

    let reply = match &update {
        RoleUpdate::NotFound => "That role doesn't exist.".to_string(),
        RoleUpdate::AlreadySet(name) => {
            format!("The verified role is already set to `{name}`")
        }
        RoleUpdate::Cleared => {
            settings.verified_role = None;
            repo.save(guild_id.get(), &settings).await?;
            "Users will no longer gain a role after verifying.".to_string()
        }
        RoleUpdate::Set(name) => {
            if let RoleArg::Id(id) = arg {
                settings.verified_role = Some(id);
                repo.save(guild_id.get(), &settings).await?;
            }
            format!("Verified role set to {name}.")
        }
    };
    reply_text(ctx, message, reply).await?;

    Ok(())
}

/// Parses the role argument; `-1` and `none` clear the setting.
fn parse_role_arg(value: &str) -> Option<RoleArg> {
    if value == "-1" || value.eq_ignore_ascii_case("none") {
        return Some(RoleArg::Clear);
    }
    value.parse::<u64>().ok().map(RoleArg::Id)
}

/// Decides the verified-role transition from the current setting, the
/// requested change, and a role lookup.
fn apply_role_update(
    current: Option<u64>,
    requested: RoleArg,
    lookup: impl Fn(u64) -> Option<String>,
) -> RoleUpdate {
    match requested {
        RoleArg::Clear => RoleUpdate::Cleared,
        RoleArg::Id(id) => {
            let Some(name) = lookup(id) else {
                return RoleUpdate::NotFound;
            };
            if current == Some(id) {
                RoleUpdate::AlreadySet(name)
            } else {
                RoleUpdate::Set(name)
            }
        }
    }
}

/// Resolves a role's name from the cached guild.
fn role_name(ctx: &Context, guild_id: GuildId, role_id: u64) -> Option<String> {
    let guild = guild_id.to_guild_cached(&ctx.cache)?;
    guild
        .roles
        .get(&RoleId::new(role_id))
        .map(|role| role.name.clone())
}
