//! Command completion logging.
//!
//! Runs as poise's `post_command` hook after a command body returns successfully.

use crate::bot::{error::guild_of, Context};

/// Logs which command ran, where, and for whom.
pub async fn handle_command_completion(ctx: Context<'_>) {
    let guild = guild_of(ctx);

    tracing::info!(
        "{}",
        completion_log_line(
            &ctx.command().qualified_name,
            &ctx.author().name,
            ctx.author().id.get(),
            guild.as_ref().map(|(name, id)| (name.as_str(), *id)),
        )
    );
}

/// Builds the completion log line.
///
/// Only the first word of the qualified name is logged, so `admin add` shows up as
/// `admin`.
///
/// # Arguments
/// - `qualified_name` - Full command name including parent commands
/// - `author` - Name of the invoking user
/// - `author_id` - Discord ID of the invoking user
/// - `guild` - Guild name and ID, or `None` for direct messages
pub fn completion_log_line(
    qualified_name: &str,
    author: &str,
    author_id: u64,
    guild: Option<(&str, u64)>,
) -> String {
    let command = qualified_name.split_whitespace().next().unwrap_or_default();

    match guild {
        Some((name, id)) => format!(
            "Command {} executed in {} (ID: {}) by {} (ID: {})",
            command, name, id, author, author_id
        ),
        None => format!(
            "Command {} executed by {} (ID: {}) in DMs",
            command, author, author_id
        ),
    }
}
