//! User flag factory for seeding admin and blacklist rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test user flag rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_flag::UserFlagFactory;
///
/// let row = UserFlagFactory::new(&db)
///     .user_id("123456789")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFlagFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    admin: bool,
    blacklisted: bool,
}

impl<'a> UserFlagFactory<'a> {
    /// Creates a new UserFlagFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented counter value
    /// - admin: `false`
    /// - blacklisted: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id().to_string(),
            admin: false,
            blacklisted: false,
        }
    }

    /// Sets the Discord user ID for the row.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the admin flag.
    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Sets the blacklist flag.
    pub fn blacklisted(mut self, blacklisted: bool) -> Self {
        self.blacklisted = blacklisted;
        self
    }

    /// Builds and inserts the user flag entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_flag::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_flag::Model, DbErr> {
        entity::user_flag::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            admin: ActiveValue::Set(self.admin),
            blacklisted: ActiveValue::Set(self.blacklisted),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a row marking the user as an admin.
///
/// Shorthand for `UserFlagFactory::new(db).user_id(user_id).admin(true).build().await`.
pub async fn create_admin(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
) -> Result<entity::user_flag::Model, DbErr> {
    UserFlagFactory::new(db)
        .user_id(user_id)
        .admin(true)
        .build()
        .await
}

/// Creates a row marking the user as blacklisted.
pub async fn create_blacklisted_user(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
) -> Result<entity::user_flag::Model, DbErr> {
    UserFlagFactory::new(db)
        .user_id(user_id)
        .blacklisted(true)
        .build()
        .await
}
