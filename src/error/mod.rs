//! Error types for startup, persistence, authorization and command execution.
//!
//! `AppError` is the top-level error type. It wraps the domain-specific errors and is also
//! the error type poise commands return, so a failed authorization check or a database error
//! inside a command body both arrive at the same error handler.

pub mod auth;
pub mod config;
pub mod extension;
pub mod internal;
pub mod startup;

use thiserror::Error;

use crate::error::{
    auth::AuthError, config::ConfigError, internal::InternalError, startup::StartupError,
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion so `?` works across the
/// repository, service and command layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration file could not be found, read, parsed or written.
    ///
    /// Fatal during startup; logged and ignored when it happens while persisting a
    /// guild join.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A startup precondition is not met (missing transcoder, directory creation failure).
    #[error(transparent)]
    StartupErr(#[from] StartupError),

    /// The invoking user is not part of the required authorization class.
    ///
    /// Mapped to a user-facing embed by the bot error handler.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Failed to join or leave a voice channel.
    #[error(transparent)]
    VoiceErr(#[from] songbird::error::JoinError),

    /// Failed to control the playback queue of a voice call.
    #[error(transparent)]
    TrackErr(#[from] songbird::tracks::ControlError),

    /// Process or filesystem operation failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal issues indicating unexpected data or possible bugs.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
