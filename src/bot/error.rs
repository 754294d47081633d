//! Command error handling.
//!
//! Framework errors the bot knows how to explain (cooldowns, authorization classes,
//! missing permissions, missing arguments) become a red embed in the channel the command
//! was used in. Everything else goes to poise's default handler, which logs it and tells
//! the user the command failed.

use std::time::Duration;

use poise::serenity_prelude::{CreateEmbed, Permissions};
use poise::{CreateReply, FrameworkError};

use crate::{
    bot::{Context, Data},
    error::{auth::AuthError, AppError},
};

/// Embed color for every error reply.
pub const ERROR_COLOR: u32 = 0xE02B2B;

/// A command failure with a dedicated user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandFailure {
    /// The command is on cooldown for this user for the given remaining time.
    Cooldown(Duration),
    /// The user failed one of the authorization checks.
    Denied(AuthError),
    /// The user lacks guild permissions the command requires.
    MissingUserPermissions(Permissions),
    /// The bot lacks guild permissions the command requires.
    MissingBotPermissions(Permissions),
    /// A required command argument was not provided.
    MissingArgument(String),
}

/// Title and description of an error embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReply {
    pub title: Option<String>,
    pub description: String,
}

impl CommandFailure {
    /// Picks out the framework errors that have a dedicated reply.
    ///
    /// Returns `None` for everything else, including command errors that are not
    /// authorization failures.
    pub fn from_framework_error(error: &FrameworkError<'_, Data, AppError>) -> Option<Self> {
        match error {
            FrameworkError::CooldownHit {
                remaining_cooldown,
                ..
            } => Some(Self::Cooldown(*remaining_cooldown)),
            FrameworkError::CommandCheckFailed {
                error: Some(AppError::AuthErr(e)),
                ..
            } => Some(Self::Denied(*e)),
            FrameworkError::Command {
                error: AppError::AuthErr(e),
                ..
            } => Some(Self::Denied(*e)),
            FrameworkError::MissingUserPermissions {
                missing_permissions: Some(permissions),
                ..
            } => Some(Self::MissingUserPermissions(*permissions)),
            FrameworkError::MissingBotPermissions {
                missing_permissions,
                ..
            } => Some(Self::MissingBotPermissions(*missing_permissions)),
            FrameworkError::ArgumentParse {
                error, input: None, ..
            } if is_missing_argument(&**error) => {
                Some(Self::MissingArgument(error.to_string()))
            }
            _ => None,
        }
    }

    /// Builds the embed text shown to the user.
    pub fn reply(&self) -> ErrorReply {
        match self {
            Self::Cooldown(remaining) => ErrorReply {
                title: None,
                description: format!(
                    "**Please wait! >-< ** - You can use this command again in {}.",
                    format_cooldown(*remaining)
                ),
            },
            Self::Denied(AuthError::UserBlacklisted) => ErrorReply {
                title: None,
                description: "You are blocked from using RinBot!".to_string(),
            },
            Self::Denied(AuthError::UserNotOwner) => ErrorReply {
                title: None,
                description: "You are not on the RinBot `owners` class, kinda SUS!".to_string(),
            },
            Self::Denied(AuthError::UserNotAdmin) => ErrorReply {
                title: None,
                description: "You are not on the RinBot `admins` class, kinda SUS!".to_string(),
            },
            Self::MissingUserPermissions(permissions) => ErrorReply {
                title: None,
                description: format!(
                    "You don't have `{}` permissions, which are necessary to run this command!",
                    permission_list(*permissions)
                ),
            },
            Self::MissingBotPermissions(permissions) => ErrorReply {
                title: None,
                description: format!(
                    "I don't have `{}` permissions, which are necessary to run this command!",
                    permission_list(*permissions)
                ),
            },
            Self::MissingArgument(message) => ErrorReply {
                title: Some("Error!".to_string()),
                description: capitalize(message),
            },
        }
    }
}

/// Formats a cooldown as "H hours M minutes S seconds", leaving out zero parts.
///
/// Hours wrap at 24; each part is rounded to the nearest whole unit.
pub fn format_cooldown(remaining: Duration) -> String {
    let total = remaining.as_secs_f64();
    let minutes = (total / 60.0).floor();
    let seconds = total - minutes * 60.0;
    let hours = (minutes / 60.0).floor();
    let minutes = minutes - hours * 60.0;
    let hours = hours % 24.0;

    let parts: Vec<String> = [(hours, "hours"), (minutes, "minutes"), (seconds, "seconds")]
        .into_iter()
        .filter_map(|(value, unit)| {
            let value = value.round();
            (value > 0.0).then(|| format!("{} {}", value as u64, unit))
        })
        .collect();

    if parts.is_empty() {
        return "a moment".to_string();
    }

    parts.join(" ")
}

/// Whether an argument parse error means a required argument was not supplied.
///
/// Poise reports both too few and too many arguments without an input string, so the
/// error type is what tells them apart.
pub fn is_missing_argument(error: &(dyn std::error::Error + Send + Sync + 'static)) -> bool {
    error.is::<poise::TooFewArguments>()
}

/// Log line for a user rejected by an authorization check.
///
/// `guild` is the guild name and ID, or `None` for direct messages.
pub fn denial_log_line(
    error: AuthError,
    author: &str,
    author_id: u64,
    guild: Option<(&str, u64)>,
) -> String {
    let location = match guild {
        Some((name, id)) => format!("on guild {} (ID: {})", name, id),
        None => "on my DMs".to_string(),
    };

    match error {
        AuthError::UserBlacklisted => format!(
            "{} (ID: {}) tried running a command {}, but they're blocked from using RinBot.",
            author, author_id, location
        ),
        AuthError::UserNotOwner => format!(
            "{} (ID: {}) tried running a command of class `owner` {}, but they're not a part of this class",
            author, author_id, location
        ),
        AuthError::UserNotAdmin => format!(
            "{} (ID: {}) tried running a command of class `admin` {}, but they're not a part of this class",
            author, author_id, location
        ),
    }
}

/// Global poise error handler.
pub async fn on_error(error: FrameworkError<'_, Data, AppError>) {
    let failure = CommandFailure::from_framework_error(&error);

    let (Some(failure), Some(ctx)) = (failure, error.ctx()) else {
        if let FrameworkError::Command { error: e, ctx, .. } = &error {
            tracing::error!(
                "Error in command `{}`: {:?}",
                ctx.command().qualified_name,
                e
            );
        }

        if let Err(e) = poise::builtins::on_error(error).await {
            tracing::error!("Error while handling error: {}", e);
        }
        return;
    };

    if let CommandFailure::Denied(auth_error) = failure {
        let guild = guild_of(ctx);
        tracing::warn!(
            "{}",
            denial_log_line(
                auth_error,
                &ctx.author().name,
                ctx.author().id.get(),
                guild.as_ref().map(|(name, id)| (name.as_str(), *id)),
            )
        );
    } else {
        tracing::debug!(
            "Command `{}` rejected: {:?}",
            ctx.command().qualified_name,
            failure
        );
    }

    if let Err(e) = send_error_embed(ctx, failure.reply()).await {
        tracing::error!("Failed to send error embed: {}", e);
    }
}

pub(crate) async fn send_error_embed(
    ctx: Context<'_>,
    reply: ErrorReply,
) -> Result<(), AppError> {
    let mut embed = CreateEmbed::new()
        .description(reply.description)
        .color(ERROR_COLOR);
    if let Some(title) = reply.title {
        embed = embed.title(title);
    }

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Name and ID of the guild the command ran in, if any.
pub(crate) fn guild_of(ctx: Context<'_>) -> Option<(String, u64)> {
    let guild_id = ctx.guild_id()?;
    let name = ctx
        .guild()
        .map(|guild| guild.name.clone())
        .unwrap_or_else(|| guild_id.to_string());
    Some((name, guild_id.get()))
}

fn permission_list(permissions: Permissions) -> String {
    permissions.get_permission_names().join(", ")
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
