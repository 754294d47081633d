//! Command checks for the three authorization classes.
//!
//! Attach with `#[poise::command(check = "checks::is_owner")]`. A failing check returns the
//! matching `AuthError`, which poise hands to `bot::error::on_error` as
//! `CommandCheckFailed`.

use crate::{
    bot::Context,
    error::AppError,
    service::access::AccessService,
};

fn access<'a>(ctx: Context<'a>) -> AccessService<'a> {
    let data = ctx.data();
    AccessService::new(&data.db, &data.config)
}

/// Passes only for users listed in the config's `owners`.
pub async fn is_owner(ctx: Context<'_>) -> Result<bool, AppError> {
    access(ctx).require_owner(ctx.author().id.get()).await?;
    Ok(true)
}

/// Passes only for users with the admin flag.
pub async fn is_admin(ctx: Context<'_>) -> Result<bool, AppError> {
    access(ctx).require_admin(ctx.author().id.get()).await?;
    Ok(true)
}

/// Passes for everyone who is not blacklisted.
pub async fn not_blacklisted(ctx: Context<'_>) -> Result<bool, AppError> {
    access(ctx)
        .require_not_blacklisted(ctx.author().id.get())
        .await?;
    Ok(true)
}
