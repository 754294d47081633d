//! Authorization predicates for the owner, admin and blacklist classes.
//!
//! Owners come from the config file, admins and blacklisted users from the database. The
//! `require_*` methods turn a failed predicate into the matching `AuthError`, which the
//! command checks in `bot::checks` propagate to the error handler.

use sea_orm::DatabaseConnection;

use crate::{
    config::ConfigStore,
    data::user_flag::UserFlagRepository,
    error::{auth::AuthError, AppError},
};

/// Service answering "may this user run this command" questions.
pub struct AccessService<'a> {
    db: &'a DatabaseConnection,
    config: &'a ConfigStore,
}

impl<'a> AccessService<'a> {
    /// Creates a new AccessService instance.
    ///
    /// # Arguments
    /// - `db` - Database holding the admin and blacklist flags
    /// - `config` - Config holding the owner list
    pub fn new(db: &'a DatabaseConnection, config: &'a ConfigStore) -> Self {
        Self { db, config }
    }

    pub async fn is_owner(&self, user_id: u64) -> bool {
        self.config.is_owner(user_id).await
    }

    pub async fn is_admin(&self, user_id: u64) -> Result<bool, AppError> {
        Ok(UserFlagRepository::new(self.db).is_admin(user_id).await?)
    }

    pub async fn is_blacklisted(&self, user_id: u64) -> Result<bool, AppError> {
        Ok(UserFlagRepository::new(self.db)
            .is_blacklisted(user_id)
            .await?)
    }

    /// Fails with `AuthError::UserNotOwner` unless the user is an owner.
    pub async fn require_owner(&self, user_id: u64) -> Result<(), AppError> {
        if !self.is_owner(user_id).await {
            return Err(AuthError::UserNotOwner.into());
        }
        Ok(())
    }

    /// Fails with `AuthError::UserNotAdmin` unless the user has the admin flag.
    ///
    /// Owners are not implicitly admins; an owner grants themselves the flag with
    /// `admin add`.
    pub async fn require_admin(&self, user_id: u64) -> Result<(), AppError> {
        if !self.is_admin(user_id).await? {
            return Err(AuthError::UserNotAdmin.into());
        }
        Ok(())
    }

    /// Fails with `AuthError::UserBlacklisted` if the user is blacklisted.
    pub async fn require_not_blacklisted(&self, user_id: u64) -> Result<(), AppError> {
        if self.is_blacklisted(user_id).await? {
            return Err(AuthError::UserBlacklisted.into());
        }
        Ok(())
    }
}
