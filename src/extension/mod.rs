//! Compiled-in command extensions and the loader that collects their commands.
//!
//! Each extension contributes a group of poise commands. Extensions load independently: one
//! that panics while building its commands, or that declares a command name another
//! extension already registered, is skipped and the rest still load.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use poise::serenity_prelude::CreateEmbed;
use poise::CreateReply;

use crate::{
    bot::{Command, Context},
    error::{extension::ExtensionError, AppError},
};

pub mod admin;
pub mod general;
pub mod music;

/// Embed color for informational replies.
pub const INFO_COLOR: u32 = 0x5865F2;

/// A named group of commands.
pub struct Extension {
    pub name: &'static str,
    pub load: fn() -> Vec<Command>,
}

/// Every extension shipped with the bot, in load order.
pub fn registry() -> Vec<Extension> {
    vec![
        Extension {
            name: "general",
            load: general::commands,
        },
        Extension {
            name: "admin",
            load: admin::commands,
        },
        Extension {
            name: "music",
            load: music::commands,
        },
    ]
}

/// Loads every extension in `registry` whose name is not listed in `disabled`.
///
/// Failures are logged per extension and never abort the remaining ones.
///
/// # Arguments
/// - `registry` - Extensions to load, in order
/// - `disabled` - Extension names skipped at load time
///
/// # Returns
/// Commands of every extension that loaded successfully
pub fn load_extensions(registry: Vec<Extension>, disabled: &[String]) -> Vec<Command> {
    for name in disabled {
        if !registry.iter().any(|extension| extension.name == name) {
            tracing::warn!("Disabled extension '{}' does not exist", name);
        }
    }

    let mut commands = Vec::new();
    let mut owners: HashMap<String, &'static str> = HashMap::new();

    for extension in registry {
        if disabled.iter().any(|name| name == extension.name) {
            tracing::info!("Extension '{}' is disabled, skipping", extension.name);
            continue;
        }

        match load_extension(&extension, &owners) {
            Ok(loaded) => {
                for command in &loaded {
                    owners.insert(command.name.clone(), extension.name);
                }
                commands.extend(loaded);
                tracing::info!("Extension loaded '{}'", extension.name);
            }
            Err(e) => {
                tracing::error!("Error while loading extension {}\n{}", extension.name, e);
            }
        }
    }

    commands
}

fn load_extension(
    extension: &Extension,
    owners: &HashMap<String, &'static str>,
) -> Result<Vec<Command>, ExtensionError> {
    let load = extension.load;
    let commands = panic::catch_unwind(AssertUnwindSafe(load))
        .map_err(|payload| ExtensionError::Panicked(panic_message(payload.as_ref())))?;

    for command in &commands {
        if let Some(owner) = owners.get(&command.name) {
            return Err(ExtensionError::DuplicateCommand {
                command: command.name.clone(),
                owner: owner.to_string(),
            });
        }
    }

    Ok(commands)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return message.to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "unknown panic".to_string()
}

/// Replies with a titled informational embed.
pub async fn reply_embed(
    ctx: Context<'_>,
    title: impl Into<String>,
    description: impl Into<String>,
) -> Result<(), AppError> {
    let embed = CreateEmbed::new()
        .title(title)
        .description(description)
        .color(INFO_COLOR);

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}
