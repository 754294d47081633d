use std::sync::Arc;

use poise::serenity_prelude::GatewayIntents;
use sea_orm::DatabaseConnection;
use serenity::all::Client;
use songbird::SerenityInit;

use crate::{
    bot::{
        error::on_error,
        handler::{command::handle_command_completion, Handler},
        Command, Data,
    },
    config::ConfigStore,
    error::AppError,
    transcoder::Transcoder,
};

/// Starts the Discord bot in a blocking manner
///
/// Builds the poise framework around the loaded commands, attaches the raw event handler
/// and the songbird voice manager, then connects. Returns once every shard has shut down,
/// which is how the `shutdown` and `reset` commands end the process.
///
/// Application commands are registered globally during framework setup, once the bot is
/// connected.
///
/// # Arguments
/// - `config` - Shared config store (token, prefix, owners)
/// - `db` - Database connection for the admin and blacklist flags
/// - `transcoder` - Located transcoder used by the music commands
/// - `commands` - Commands collected from the loaded extensions
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(
    config: Arc<ConfigStore>,
    db: DatabaseConnection,
    transcoder: Transcoder,
    commands: Vec<Command>,
) -> Result<(), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    let snapshot = config.snapshot().await;

    let options = poise::FrameworkOptions {
        commands,
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(snapshot.prefix.clone()),
            mention_as_prefix: true,
            ignore_bots: true,
            execute_self_messages: false,
            ..Default::default()
        },
        on_error: |error| Box::pin(on_error(error)),
        post_command: |ctx| Box::pin(handle_command_completion(ctx)),
        ..Default::default()
    };

    let data_config = config.clone();
    let framework = poise::Framework::builder()
        .options(options)
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                tracing::info!("Syncing commands globally");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;

                Ok(Data {
                    config: data_config,
                    db,
                    transcoder,
                })
            })
        })
        .build();

    let mut client = Client::builder(&snapshot.token, intents)
        .event_handler(Handler::new(config))
        .framework(framework)
        .register_songbird()
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
