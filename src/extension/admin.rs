//! Bot management commands.
//!
//! `admin` and the process control commands are restricted to owners; `blacklist` to
//! admins. Owners can never be blacklisted.

use poise::serenity_prelude::User;
use sea_orm::DatabaseConnection;

use crate::{
    bot::{checks, Command, Context},
    config::ConfigStore,
    data::user_flag::UserFlagRepository,
    error::AppError,
    extension::reply_embed,
    model::user_flag::{Flag, UserFlags},
    service::access::AccessService,
    startup::RESET_ARG,
};

pub fn commands() -> Vec<Command> {
    vec![admin(), blacklist(), reset(), shutdown()]
}

/// Outcome of granting or revoking a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagChange {
    /// The flag was set or cleared.
    Changed,
    /// The user already had the requested value.
    Unchanged,
    /// The target is an owner and cannot be blacklisted.
    RefusedOwner,
}

/// Sets `flag` to `value` for `user_id`.
///
/// # Returns
/// - `Ok(FlagChange)` - What happened to the flag
/// - `Err(AppError::DbErr)` - Database error while reading or writing the flag
pub async fn change_flag(
    db: &DatabaseConnection,
    config: &ConfigStore,
    user_id: u64,
    flag: Flag,
    value: bool,
) -> Result<FlagChange, AppError> {
    let access = AccessService::new(db, config);
    let repo = UserFlagRepository::new(db);

    if flag == Flag::Blacklisted && value && access.is_owner(user_id).await {
        return Ok(FlagChange::RefusedOwner);
    }

    let current = repo
        .find_by_user_id(user_id)
        .await?
        .is_some_and(|flags| match flag {
            Flag::Admin => flags.admin,
            Flag::Blacklisted => flags.blacklisted,
        });
    if current == value {
        return Ok(FlagChange::Unchanged);
    }

    match flag {
        Flag::Admin => repo.set_admin(user_id, value).await?,
        Flag::Blacklisted => repo.set_blacklisted(user_id, value).await?,
    }

    Ok(FlagChange::Changed)
}

/// Manage the `admins` class.
#[poise::command(
    slash_command,
    prefix_command,
    subcommands("admin_add", "admin_remove", "admin_list"),
    subcommand_required
)]
pub async fn admin(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Add a user to the `admins` class.
#[poise::command(
    slash_command,
    prefix_command,
    rename = "add",
    check = "checks::is_owner"
)]
pub async fn admin_add(
    ctx: Context<'_>,
    #[description = "User to promote"] user: User,
) -> Result<(), AppError> {
    let data = ctx.data();
    let change = change_flag(&data.db, &data.config, user.id.get(), Flag::Admin, true).await?;

    let message = match change {
        FlagChange::Changed => format!("{} was added to the `admins` class.", user.name),
        _ => format!("{} is already an admin.", user.name),
    };
    reply_embed(ctx, "Admins", message).await
}

/// Remove a user from the `admins` class.
#[poise::command(
    slash_command,
    prefix_command,
    rename = "remove",
    check = "checks::is_owner"
)]
pub async fn admin_remove(
    ctx: Context<'_>,
    #[description = "User to demote"] user: User,
) -> Result<(), AppError> {
    let data = ctx.data();
    let change = change_flag(&data.db, &data.config, user.id.get(), Flag::Admin, false).await?;

    let message = match change {
        FlagChange::Changed => format!("{} was removed from the `admins` class.", user.name),
        _ => format!("{} is not an admin.", user.name),
    };
    reply_embed(ctx, "Admins", message).await
}

/// List the `admins` class.
#[poise::command(
    slash_command,
    prefix_command,
    rename = "list",
    check = "checks::is_owner"
)]
pub async fn admin_list(ctx: Context<'_>) -> Result<(), AppError> {
    let admins = UserFlagRepository::new(&ctx.data().db)
        .get_all_admins()
        .await?;

    reply_embed(ctx, "Admins", user_list(&admins, "There are no admins.")).await
}

/// Manage the blacklist.
#[poise::command(
    slash_command,
    prefix_command,
    subcommands("blacklist_add", "blacklist_remove", "blacklist_list"),
    subcommand_required
)]
pub async fn blacklist(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Block a user from using the bot.
#[poise::command(
    slash_command,
    prefix_command,
    rename = "add",
    check = "checks::is_admin"
)]
pub async fn blacklist_add(
    ctx: Context<'_>,
    #[description = "User to block"] user: User,
) -> Result<(), AppError> {
    let data = ctx.data();
    let change = change_flag(
        &data.db,
        &data.config,
        user.id.get(),
        Flag::Blacklisted,
        true,
    )
    .await?;

    let message = match change {
        FlagChange::Changed => format!("{} was added to the blacklist.", user.name),
        FlagChange::Unchanged => format!("{} is already blacklisted.", user.name),
        FlagChange::RefusedOwner => format!("{} is an owner and can't be blacklisted.", user.name),
    };
    reply_embed(ctx, "Blacklist", message).await
}

/// Unblock a user.
#[poise::command(
    slash_command,
    prefix_command,
    rename = "remove",
    check = "checks::is_admin"
)]
pub async fn blacklist_remove(
    ctx: Context<'_>,
    #[description = "User to unblock"] user: User,
) -> Result<(), AppError> {
    let data = ctx.data();
    let change = change_flag(
        &data.db,
        &data.config,
        user.id.get(),
        Flag::Blacklisted,
        false,
    )
    .await?;

    let message = match change {
        FlagChange::Changed => format!("{} was removed from the blacklist.", user.name),
        _ => format!("{} is not blacklisted.", user.name),
    };
    reply_embed(ctx, "Blacklist", message).await
}

/// List blacklisted users.
#[poise::command(
    slash_command,
    prefix_command,
    rename = "list",
    check = "checks::is_admin"
)]
pub async fn blacklist_list(ctx: Context<'_>) -> Result<(), AppError> {
    let blacklisted = UserFlagRepository::new(&ctx.data().db)
        .get_all_blacklisted()
        .await?;

    reply_embed(
        ctx,
        "Blacklist",
        user_list(&blacklisted, "Nobody is blacklisted."),
    )
    .await
}

/// Restart the bot in a fresh process.
///
/// The new process is started with the reset argument so it waits for this one to log out
/// before connecting.
#[poise::command(slash_command, prefix_command, check = "checks::is_owner")]
pub async fn reset(ctx: Context<'_>) -> Result<(), AppError> {
    let exe = std::env::current_exe()?;
    std::process::Command::new(&exe).arg(RESET_ARG).spawn()?;

    tracing::info!("Reset requested by {} (ID: {})", ctx.author().name, ctx.author().id);
    reply_embed(ctx, "Reset", "Restarting, see you in a bit!").await?;

    ctx.framework().shard_manager().shutdown_all().await;
    Ok(())
}

/// Shut the bot down.
#[poise::command(slash_command, prefix_command, check = "checks::is_owner")]
pub async fn shutdown(ctx: Context<'_>) -> Result<(), AppError> {
    tracing::info!(
        "Shutdown requested by {} (ID: {})",
        ctx.author().name,
        ctx.author().id
    );
    reply_embed(ctx, "Shutdown", "Goodbye!").await?;

    ctx.framework().shard_manager().shutdown_all().await;
    Ok(())
}

fn user_list(users: &[UserFlags], empty: &str) -> String {
    if users.is_empty() {
        return empty.to_string();
    }

    users
        .iter()
        .map(|user| format!("<@{}> (`{}`)", user.user_id, user.user_id))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BotConfig;
    use test_utils::{builder::TestBuilder, factory, fixture};

    fn config_store(owners: &[&str]) -> ConfigStore {
        let config: BotConfig = serde_json::from_value(fixture::config::json(owners)).unwrap();
        ConfigStore::new("config.json", config)
    }

    /// Tests that owners cannot be put on the blacklist.
    ///
    /// Expected: RefusedOwner and no flag stored
    #[tokio::test]
    async fn owner_cannot_be_blacklisted() -> Result<(), AppError> {
        let test = TestBuilder::new().with_access_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = config_store(&["111"]);

        let change = change_flag(db, &config, 111, Flag::Blacklisted, true).await?;

        assert_eq!(change, FlagChange::RefusedOwner);
        assert!(!UserFlagRepository::new(db).is_blacklisted(111).await?);

        Ok(())
    }

    /// Tests granting and revoking the admin flag.
    ///
    /// Expected: Changed on each transition, Unchanged when repeated
    #[tokio::test]
    async fn admin_flag_transitions() -> Result<(), AppError> {
        let test = TestBuilder::new().with_access_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = config_store(&["111"]);

        assert_eq!(
            change_flag(db, &config, 222, Flag::Admin, true).await?,
            FlagChange::Changed
        );
        assert_eq!(
            change_flag(db, &config, 222, Flag::Admin, true).await?,
            FlagChange::Unchanged
        );
        assert_eq!(
            change_flag(db, &config, 222, Flag::Admin, false).await?,
            FlagChange::Changed
        );
        assert_eq!(
            change_flag(db, &config, 222, Flag::Admin, false).await?,
            FlagChange::Unchanged
        );

        Ok(())
    }

    /// Tests that removing someone from the blacklist keeps their admin flag.
    ///
    /// Expected: user is still an admin after unblacklisting
    #[tokio::test]
    async fn unblacklisting_keeps_admin_flag() -> Result<(), AppError> {
        let test = TestBuilder::new().with_access_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_admin(db, "333").await?;
        let config = config_store(&[]);

        change_flag(db, &config, 333, Flag::Blacklisted, true).await?;
        change_flag(db, &config, 333, Flag::Blacklisted, false).await?;

        let repo = UserFlagRepository::new(db);
        assert!(repo.is_admin(333).await?);
        assert!(!repo.is_blacklisted(333).await?);

        Ok(())
    }

    #[test]
    fn user_list_mentions_each_user() {
        let users = vec![
            UserFlags {
                user_id: 1,
                admin: true,
                blacklisted: false,
            },
            UserFlags {
                user_id: 2,
                admin: true,
                blacklisted: false,
            },
        ];

        assert_eq!(user_list(&users, "none"), "<@1> (`1`)\n<@2> (`2`)");
        assert_eq!(user_list(&[], "none"), "none");
    }

    #[test]
    fn management_commands_are_checked() {
        for command in commands() {
            if command.subcommands.is_empty() {
                assert_eq!(command.checks.len(), 1, "{}", command.name);
            }
            for subcommand in &command.subcommands {
                assert_eq!(subcommand.checks.len(), 1, "{}", subcommand.name);
            }
        }
    }
}
