use std::sync::Arc;

use serenity::all::{Context, EventHandler, Guild, Ready};
use serenity::async_trait;

use crate::config::ConfigStore;

pub mod command;
pub mod guild;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub config: Arc<ConfigStore>,
}

impl Handler {
    pub fn new(config: Arc<ConfigStore>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.config, ctx, guild, is_new).await;
    }
}
