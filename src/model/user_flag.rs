//! Authorization flags stored per Discord user.

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Admin and blacklist flags for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFlags {
    /// Discord ID of the user
    pub user_id: u64,
    /// Whether the user is in the `admins` class.
    pub admin: bool,
    /// Whether the user is blocked from using the bot.
    pub blacklisted: bool,
}

impl UserFlags {
    /// Converts an entity model to the domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(UserFlags)` - The converted model
    /// - `Err(AppError::InternalErr(ParseStringId))` - The stored user ID is not a valid u64
    pub fn from_entity(entity: entity::user_flag::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            admin: entity.admin,
            blacklisted: entity.blacklisted,
        })
    }
}

/// Which flag an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Admin,
    Blacklisted,
}
