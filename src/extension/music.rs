//! Voice channel music playback.
//!
//! Sources are decoded by the transcoder into a WAV stream and queued on the guild's
//! songbird call. Only direct `http(s)` media URLs are accepted.

use std::sync::Arc;

use poise::serenity_prelude::{ChannelId, GuildId};
use songbird::input::{ChildContainer, Input};
use songbird::Songbird;

use crate::{
    bot::{
        checks,
        error::{send_error_embed, ErrorReply},
        Command, Context,
    },
    error::{internal::InternalError, AppError},
    extension::reply_embed,
    transcoder::is_streamable_source,
};

const TITLE: &str = "Music";

pub fn commands() -> Vec<Command> {
    vec![join(), leave(), play(), skip(), stop()]
}

/// Join the voice channel you are in.
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    check = "checks::not_blacklisted"
)]
pub async fn join(ctx: Context<'_>) -> Result<(), AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    if join_author_channel(ctx, guild_id).await? {
        reply_embed(ctx, TITLE, "Joined your voice channel.").await?;
    }
    Ok(())
}

/// Leave the voice channel and clear the queue.
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    check = "checks::not_blacklisted"
)]
pub async fn leave(ctx: Context<'_>) -> Result<(), AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };
    let manager = voice_manager(ctx).await?;

    let Some(call) = manager.get(guild_id) else {
        return reply_embed(ctx, TITLE, "I'm not in a voice channel.").await;
    };
    call.lock().await.queue().stop();
    manager.remove(guild_id).await?;

    reply_embed(ctx, TITLE, "Left the voice channel.").await
}

/// Queue a track, joining your voice channel first if needed.
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    check = "checks::not_blacklisted"
)]
pub async fn play(
    ctx: Context<'_>,
    #[description = "Media URL"]
    #[rest]
    source: String,
) -> Result<(), AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    if !is_streamable_source(&source) {
        let reply = ErrorReply {
            title: Some("Error!".to_string()),
            description: "Only `http://` and `https://` links can be played.".to_string(),
        };
        return send_error_embed(ctx, reply).await;
    }

    let manager = voice_manager(ctx).await?;

    if manager.get(guild_id).is_none() && !join_author_channel(ctx, guild_id).await? {
        return Ok(());
    }
    let Some(call) = manager.get(guild_id) else {
        return Ok(());
    };

    let child = ctx.data().transcoder.spawn_wav_stream(&source)?;
    let input: Input = ChildContainer::from(child).into();

    let position = {
        let mut call = call.lock().await;
        call.enqueue_input(input).await;
        call.queue().len()
    };

    tracing::debug!("Queued '{}' in guild {} at {}", source, guild_id, position);
    reply_embed(ctx, TITLE, queued_text(&source, position)).await
}

/// Skip the current track.
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    check = "checks::not_blacklisted"
)]
pub async fn skip(ctx: Context<'_>) -> Result<(), AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };
    let manager = voice_manager(ctx).await?;

    let Some(call) = manager.get(guild_id) else {
        return reply_embed(ctx, TITLE, "Nothing is playing.").await;
    };

    let remaining = {
        let call = call.lock().await;
        let queue = call.queue();
        if queue.is_empty() {
            None
        } else {
            queue.skip()?;
            Some(queue.len().saturating_sub(1))
        }
    };

    match remaining {
        Some(remaining) => {
            reply_embed(
                ctx,
                TITLE,
                format!("Skipped. {} track(s) left in the queue.", remaining),
            )
            .await
        }
        None => reply_embed(ctx, TITLE, "Nothing is playing.").await,
    }
}

/// Stop playback and clear the queue.
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    check = "checks::not_blacklisted"
)]
pub async fn stop(ctx: Context<'_>) -> Result<(), AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };
    let manager = voice_manager(ctx).await?;

    if let Some(call) = manager.get(guild_id) {
        call.lock().await.queue().stop();
    }

    reply_embed(ctx, TITLE, "Stopped playback and cleared the queue.").await
}

async fn voice_manager(ctx: Context<'_>) -> Result<Arc<Songbird>, AppError> {
    songbird::get(ctx.serenity_context())
        .await
        .ok_or(AppError::from(InternalError::VoiceManagerMissing))
}

/// Voice channel the invoking user is connected to, read from the guild cache.
fn author_voice_channel(ctx: Context<'_>) -> Option<ChannelId> {
    let guild = ctx.guild()?;
    guild
        .voice_states
        .get(&ctx.author().id)
        .and_then(|state| state.channel_id)
}

/// Joins the author's voice channel.
///
/// # Returns
/// - `Ok(true)` - Connected to the author's channel
/// - `Ok(false)` - The author is not in a voice channel; they were told so
/// - `Err(AppError)` - Voice manager missing or the join failed
async fn join_author_channel(ctx: Context<'_>, guild_id: GuildId) -> Result<bool, AppError> {
    let Some(channel_id) = author_voice_channel(ctx) else {
        reply_embed(
            ctx,
            TITLE,
            "You are not in a voice channel, please join one first.",
        )
        .await?;
        return Ok(false);
    };

    let manager = voice_manager(ctx).await?;
    manager.join(guild_id, channel_id).await?;

    tracing::info!("Joined voice channel {} in guild {}", channel_id, guild_id);
    Ok(true)
}

fn queued_text(source: &str, position: usize) -> String {
    if position <= 1 {
        format!("Now playing `{}`.", source)
    } else {
        format!("Queued `{}` at position {}.", source, position)
    }
}
