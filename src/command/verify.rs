//! The `verify` command: link a game account to the caller's Discord account.

use serenity::all::{
    Context, CreateEmbed, CreateEmbedFooter, EditMessage, GuildId, Message, RoleId, UserId,
};

use crate::bot::handler::Handler;
use crate::command::{
    delete_after, reply_embed, reply_text, COLOR_FAILURE, COLOR_SUCCESS, COLOR_WARNING,
    OUTCOME_TTL,
};
use crate::data::GuildSettingsRepository;
use crate::db::QueryGateway;
use crate::error::AppError;
use crate::service::throttle::ThrottleError;
use crate::service::verify::{VerificationService, VerifyOutcome};

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    message: &Message,
    args: &str,
) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };
    let user_id = message.author.id;
    let token = (!args.is_empty()).then_some(args);

    // Reject throttled attempts before any side effects. The guard holds the
    // guild's in-flight slot until this attempt finishes.
    let _slot = match handler.throttle.acquire(guild_id.get(), user_id.get()) {
        Ok(slot) => slot,
        Err(err) => {
            let description = match err {
                ThrottleError::Cooldown { retry_after } => format!(
                    "You are doing that too often. Try again in {} seconds.",
                    retry_after.as_secs().max(1)
                ),
                ThrottleError::ConcurrencyExceeded => {
                    "There are too many verifications in progress, please try again in 30 seconds."
                        .to_string()
                }
            };
            let embed = CreateEmbed::new()
                .description(description)
                .color(COLOR_WARNING);
            reply_embed(ctx, message, embed).await?;
            return Ok(());
        }
    };

    // The OTP is a secret regardless of whether deletion succeeds.
    if message.delete(&ctx.http).await.is_err() {
        reply_text(
            ctx,
            message,
            "I can't delete messages in this channel.\n\
             Please delete the message with your OTP token yourself.",
        )
        .await?;
    }

    let settings = GuildSettingsRepository::new(&handler.db)
        .get(guild_id.get())
        .await?;

    // A caller already holding the configured role needs nothing from us.
    if let Some(role_id) = settings.verified_role {
        if author_has_role(message, role_id) {
            reply_text(
                ctx,
                message,
                "You are already verified.\nIf this is an error, please contact staff.",
            )
            .await?;
            return Ok(());
        }
    }

    let embed = CreateEmbed::new()
        .title("Please wait...")
        .description("Attempting to verify your account...");
    let mut status = reply_embed(ctx, message, embed).await?;

    let db = handler.registry.get(guild_id.get(), &settings).await?;
    let gateway = QueryGateway::new(db);
    let service = VerificationService::new(&gateway);

    let outcome = match service.verify(user_id.get(), token).await {
        Ok(outcome) => outcome,
        Err(err) => {
            // No further processing; remove the waiting message before the
            // dispatcher reports the failure.
            let _ = status.delete(&ctx.http).await;
            return Err(err.into());
        }
    };

    let embed = match outcome {
        VerifyOutcome::AlreadyLinked(link) => {
            grant_verified_role(
                handler,
                ctx,
                message,
                guild_id,
                user_id,
                settings.verified_role,
                link.ckey.as_deref(),
            )
            .await;
            CreateEmbed::new()
                .title("Success!")
                .description(
                    "You are already verified. If you were missing any roles, they have been added.",
                )
                .color(COLOR_SUCCESS)
        }
        VerifyOutcome::Linked(link) => {
            grant_verified_role(
                handler,
                ctx,
                message,
                guild_id,
                user_id,
                settings.verified_role,
                link.ckey.as_deref(),
            )
            .await;
            CreateEmbed::new()
                .title("Success!")
                .description("Verification complete!\nYou can now log in to the server.")
                .color(COLOR_SUCCESS)
        }
        VerifyOutcome::MissingToken => CreateEmbed::new()
            .title("Could not verify!")
            .description(format!(
                "No OTP token given.\n\
                 Please log into the server and get your OTP token.\n\
                 Usage: {}verify super-cool-token",
                handler.prefix
            ))
            .footer(CreateEmbedFooter::new("Error: No token passed."))
            .color(COLOR_FAILURE),
        VerifyOutcome::InvalidToken => CreateEmbed::new()
            .title("Could not verify!")
            .description(
                "Invalid OTP token.\n\
                 Please make sure you generated a token by joining the server first.\n\
                 Else make sure you copied the token correctly. Do not add anything after \
                 the token.\n\
                 The token should have the format of words between dashes.\n\
                 e.g. `super-cool-token`",
            )
            .footer(CreateEmbedFooter::new("Error: Invalid or expired OTP token."))
            .color(COLOR_FAILURE),
        VerifyOutcome::WriteNotVisible => CreateEmbed::new()
            .title("Could not verify!")
            .description("Something went wrong. Please contact staff before proceeding.")
            .footer(CreateEmbedFooter::new(
                "Error: Could not verify link after creation.",
            ))
            .color(COLOR_FAILURE),
    };

    status.edit(&ctx.http, EditMessage::new().embed(embed)).await?;

    // The terminal outcome self-cleans like the invoking message did.
    delete_after(ctx, status, OUTCOME_TTL);

    Ok(())
}

/// Whether the invoking member already carries the given role.
fn author_has_role(message: &Message, role_id: u64) -> bool {
    message
        .member
        .as_deref()
        .is_some_and(|member| member.roles.contains(&RoleId::new(role_id)))
}

/// Adds the configured verified role to the caller, skipping members that
/// already hold it. Failures are logged and reported, never fatal to the
/// verification.
async fn grant_verified_role(
    handler: &Handler,
    ctx: &Context,
    message: &Message,
    guild_id: GuildId,
    user_id: UserId,
    verified_role: Option<u64>,
    ckey: Option<&str>,
) {
    let Some(role_id) = verified_role else {
        return;
    };
    if author_has_role(message, role_id) {
        return;
    }

    let reason = format!(
        "Verified by {}verify (ckey: {})",
        handler.prefix,
        ckey.unwrap_or("unknown")
    );
    if let Err(err) = ctx
        .http
        .add_member_role(guild_id, user_id, RoleId::new(role_id), Some(&reason))
        .await
    {
        tracing::error!(
            "Failed to add role {} to user {} in guild {}: {}",
            role_id,
            user_id,
            guild_id,
            err
        );
        let _ = reply_text(
            ctx,
            message,
            "I can't add the missing role(s) to you. Please contact staff.",
        )
        .await;
    }
}
