//! Ready event handler.
//!
//! Fired once per gateway session after the initial handshake. Logs a startup banner and
//! sets the bot's presence.

use serenity::all::{ActivityData, Context, Ready};

/// Presence shown under the bot's name.
pub const ACTIVITY: &str = "to your commands :3";

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    for line in banner_lines(&ready.user.name, ready.version) {
        tracing::info!("{}", line);
    }

    ctx.set_activity(Some(ActivityData::listening(ACTIVITY)));
}

/// Startup banner logged once the bot is connected.
///
/// # Arguments
/// - `user_name` - Name of the bot user the token belongs to
/// - `gateway_version` - Gateway protocol version reported in the ready payload
pub fn banner_lines(user_name: &str, gateway_version: u8) -> Vec<String> {
    vec![
        format!(
            "{} v{} is connected to Discord",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ),
        format!("Logged in as {}", user_name),
        format!("Gateway version: {}", gateway_version),
        format!(
            "Running on: {} ({})",
            std::env::consts::OS,
            std::env::consts::ARCH
        ),
    ]
}
