//! Ready event handler for bot initialization.

use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// Fires once per connection after successful authentication and the initial
/// gateway handshake.
///
/// # Arguments
/// - `ctx` - Discord context
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);
}
