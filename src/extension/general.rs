//! General purpose commands available to everyone who is not blacklisted.

use crate::{
    bot::{checks, Command, Context},
    error::AppError,
    extension::reply_embed,
};

pub fn commands() -> Vec<Command> {
    vec![ping(), about()]
}

/// Check if the bot is alive and show the gateway latency.
#[poise::command(
    slash_command,
    prefix_command,
    user_cooldown = 5,
    check = "checks::not_blacklisted"
)]
pub async fn ping(ctx: Context<'_>) -> Result<(), AppError> {
    let latency = ctx.ping().await;

    reply_embed(ctx, "🏓 Pong!", latency_text(latency.as_millis())).await
}

/// Show information about the bot.
#[poise::command(slash_command, prefix_command, check = "checks::not_blacklisted")]
pub async fn about(ctx: Context<'_>) -> Result<(), AppError> {
    let prefix = ctx.data().config.snapshot().await.prefix;

    reply_embed(ctx, "About RinBot", about_text(&prefix)).await
}

fn latency_text(millis: u128) -> String {
    format!("The bot latency is {}ms.", millis)
}

fn about_text(prefix: &str) -> String {
    format!(
        "**Version:** {}\n**Prefix:** `{}` or slash commands\n**Platform:** {} ({})",
        env!("CARGO_PKG_VERSION"),
        prefix,
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_check_blacklist() {
        for command in commands() {
            assert_eq!(command.checks.len(), 1, "{}", command.name);
        }
    }

    #[test]
    fn about_shows_prefix_and_version() {
        let text = about_text("!");

        assert!(text.contains("`!`"));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn latency_is_in_milliseconds() {
        assert_eq!(latency_text(42), "The bot latency is 42ms.");
    }
}
