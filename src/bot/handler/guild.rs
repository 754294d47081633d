//! Guild event handler for recording guild joins.
//!
//! `guild_create` fires for every guild on startup, when a guild comes back after an
//! outage, and when the bot is added to a new guild. Only the last case is persisted: the
//! guild ID is appended to `joined_on` in the config file.

use serenity::all::{Context, Guild};

use crate::config::ConfigStore;

/// Handles the guild_create event.
///
/// # Arguments
/// - `config` - Config store the join is persisted to
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `guild` - Guild data from Discord
/// - `is_new` - `Some(true)` when the bot was just added to the guild
pub async fn handle_guild_create(
    config: &ConfigStore,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}, new: {:?}",
        guild.name,
        guild.id,
        guild.member_count,
        is_new
    );

    record_guild_join(config, &guild, is_new).await;
}

/// Persists a guild join if the event reports a new guild.
///
/// Write failures are logged and swallowed; the bot keeps running and the join is retried
/// on the next new-guild event for the same guild.
///
/// # Returns
/// - `true` - The guild was newly written to the config
/// - `false` - Not a new join, already recorded, or the write failed
pub async fn record_guild_join(config: &ConfigStore, guild: &Guild, is_new: Option<bool>) -> bool {
    if is_new != Some(true) {
        return false;
    }

    let guild_id = guild.id.get();

    match config.record_guild_join(guild_id).await {
        Ok(true) => {
            tracing::info!("Joined guild ID: {}", guild_id);
            true
        }
        Ok(false) => {
            tracing::debug!("Guild {} already recorded in config", guild_id);
            false
        }
        Err(e) => {
            tracing::error!("Failed to record join of guild {}: {}", guild_id, e);
            false
        }
    }
}
