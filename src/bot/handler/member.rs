//! Member join/leave handlers for the linking workflow.
//!
//! Both events only matter when the guild restricts game-server entry to
//! guild members. Failures are logged and never propagated out of the event
//! handler.

use serenity::all::{Context, GuildId, Member, User};

use crate::bot::handler::Handler;
use crate::data::{AccountLinkRepository, GuildSettingsRepository};
use crate::db::QueryGateway;
use crate::error::database::DatabaseError;
use crate::model::settings::GuildSettings;

/// Handles the guild_member_addition event when a member joins a guild.
///
/// Under `members_only` the joining member's link state is looked up so the
/// join is visible in the logs next to the game server's own entry checks;
/// nothing is mutated on join.
pub async fn handle_guild_member_addition(handler: &Handler, _ctx: Context, new_member: Member) {
    let guild_id = new_member.guild_id.get();
    let discord_id = new_member.user.id.get();

    let settings = match GuildSettingsRepository::new(&handler.db).get(guild_id).await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings for guild {}: {}", guild_id, e);
            return;
        }
    };
    if !settings.members_only {
        return;
    }

    let db = match handler.registry.get(guild_id, &settings).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to get pool for guild {}: {}", guild_id, e);
            return;
        }
    };
    let gateway = QueryGateway::new(db);
    let links = AccountLinkRepository::new(&gateway);

    match links.find_by_discord_id(discord_id).await {
        Ok(Some(link)) => tracing::debug!(
            "Member {} joined guild {} with a link (valid: {})",
            discord_id,
            guild_id,
            link.valid
        ),
        Ok(None) => tracing::debug!(
            "Member {} joined guild {} without a link",
            discord_id,
            guild_id
        ),
        Err(e) => tracing::error!(
            "Failed to look up link for joining member {}: {}",
            discord_id,
            e
        ),
    }
}

/// Handles the guild_member_removal event when a member leaves a guild.
///
/// Under `members_only` a leaving member may no longer enter the game
/// server, so all their valid links are invalidated.
pub async fn handle_guild_member_removal(
    handler: &Handler,
    _ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    let guild_id = guild_id.get();
    let discord_id = user.id.get();

    let settings = match GuildSettingsRepository::new(&handler.db).get(guild_id).await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings for guild {}: {}", guild_id, e);
            return;
        }
    };
    if !settings.members_only {
        return;
    }

    let db = match handler.registry.get(guild_id, &settings).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to get pool for guild {}: {}", guild_id, e);
            return;
        }
    };
    let gateway = QueryGateway::new(db);

    match revoke_links_on_leave(&settings, &gateway, discord_id).await {
        Ok(0) => {}
        Ok(rows) => tracing::info!(
            "Invalidated {} link(s) for user {} leaving guild {}",
            rows,
            discord_id,
            guild_id
        ),
        Err(e) => tracing::error!(
            "Failed to invalidate links for leaving member {}: {}",
            discord_id,
            e
        ),
    }
}

/// Invalidates a leaving member's links, gated on the guild's settings.
///
/// A guild without the `members_only` restriction never mutates the game
/// database on member removal.
async fn revoke_links_on_leave(
    settings: &GuildSettings,
    gateway: &QueryGateway,
    discord_id: u64,
) -> Result<u64, DatabaseError> {
    if !settings.members_only {
        return Ok(0);
    }

    AccountLinkRepository::new(gateway)
        .invalidate_by_discord_id(discord_id)
        .await
}
