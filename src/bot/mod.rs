//! Discord integration: framework data, command checks, event and error handlers.
//!
//! Commands and prefix handling run through poise, which sits on top of a serenity client.
//! Raw gateway events the framework does not cover (ready banner, guild joins) are handled
//! by the serenity `EventHandler` in `handler`.
//!
//! # Gateway Intents
//!
//! The bot requests the non-privileged intents plus `MESSAGE_CONTENT`, which text commands
//! need to read the prefix. `MESSAGE_CONTENT` is a privileged intent and must be enabled in
//! the Discord Developer Portal for the bot application.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{config::ConfigStore, error::AppError, transcoder::Transcoder};

pub mod checks;
pub mod error;
pub mod handler;
pub mod start;

/// Data shared with every command invocation.
pub struct Data {
    pub config: Arc<ConfigStore>,
    pub db: DatabaseConnection,
    pub transcoder: Transcoder,
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;
pub type Command = poise::Command<Data, AppError>;
