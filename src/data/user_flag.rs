//! User flag repository for the admin and blacklist classes.
//!
//! Provides `UserFlagRepository`, the only code that touches the `user_flag` table. A row
//! holds both flags for one user and is removed as soon as neither flag is set, so the table
//! only ever lists users that are admins, blacklisted, or both.

use chrono::Utc;
use entity::user_flag::Column;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::user_flag::{Flag, UserFlags},
};

/// Repository providing database operations for user flags.
pub struct UserFlagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFlagRepository<'a> {
    /// Creates a new UserFlagRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the flags stored for a user.
    ///
    /// # Returns
    /// - `Ok(Some(UserFlags))` - The user has at least one flag set
    /// - `Ok(None)` - No flags stored for the user
    /// - `Err(AppError)` - Database error or unparseable stored ID
    pub async fn find_by_user_id(&self, user_id: u64) -> Result<Option<UserFlags>, AppError> {
        let entity = entity::prelude::UserFlag::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.map(UserFlags::from_entity).transpose()
    }

    /// Checks whether the user is in the admins class.
    pub async fn is_admin(&self, user_id: u64) -> Result<bool, DbErr> {
        self.has_flag(user_id, Flag::Admin).await
    }

    /// Checks whether the user is blacklisted.
    pub async fn is_blacklisted(&self, user_id: u64) -> Result<bool, DbErr> {
        self.has_flag(user_id, Flag::Blacklisted).await
    }

    /// Grants or revokes admin status.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `admin` - Whether the user should be an admin
    ///
    /// # Returns
    /// - `Ok(())` - Flag updated (revoking a flag that was never set is a no-op)
    /// - `Err(DbErr)` - Database error during upsert or cleanup
    pub async fn set_admin(&self, user_id: u64, admin: bool) -> Result<(), DbErr> {
        self.set_flag(user_id, Flag::Admin, admin).await
    }

    /// Adds a user to or removes a user from the blacklist.
    pub async fn set_blacklisted(&self, user_id: u64, blacklisted: bool) -> Result<(), DbErr> {
        self.set_flag(user_id, Flag::Blacklisted, blacklisted).await
    }

    /// Gets every admin, ordered by user ID.
    pub async fn get_all_admins(&self) -> Result<Vec<UserFlags>, AppError> {
        self.get_all_with(Flag::Admin).await
    }

    /// Gets every blacklisted user, ordered by user ID.
    pub async fn get_all_blacklisted(&self) -> Result<Vec<UserFlags>, AppError> {
        self.get_all_with(Flag::Blacklisted).await
    }

    async fn has_flag(&self, user_id: u64, flag: Flag) -> Result<bool, DbErr> {
        let count = entity::prelude::UserFlag::find()
            .filter(Column::UserId.eq(user_id.to_string()))
            .filter(column_for(flag).eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets a single flag, leaving the other one untouched.
    ///
    /// Setting a flag upserts the row. Clearing one updates the row and then deletes it if
    /// both flags are now false.
    async fn set_flag(&self, user_id: u64, flag: Flag, value: bool) -> Result<(), DbErr> {
        let id = user_id.to_string();
        let column = column_for(flag);

        if value {
            entity::prelude::UserFlag::insert(entity::user_flag::ActiveModel {
                user_id: ActiveValue::Set(id),
                admin: ActiveValue::Set(flag == Flag::Admin),
                blacklisted: ActiveValue::Set(flag == Flag::Blacklisted),
                updated_at: ActiveValue::Set(Utc::now()),
            })
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([column, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

            return Ok(());
        }

        entity::prelude::UserFlag::update_many()
            .filter(Column::UserId.eq(id.clone()))
            .col_expr(column, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        entity::prelude::UserFlag::delete_many()
            .filter(Column::UserId.eq(id))
            .filter(Column::Admin.eq(false))
            .filter(Column::Blacklisted.eq(false))
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn get_all_with(&self, flag: Flag) -> Result<Vec<UserFlags>, AppError> {
        let entities = entity::prelude::UserFlag::find()
            .filter(column_for(flag).eq(true))
            .order_by_asc(Column::UserId)
            .all(self.db)
            .await?;

        entities.into_iter().map(UserFlags::from_entity).collect()
    }
}

fn column_for(flag: Flag) -> Column {
    match flag {
        Flag::Admin => Column::Admin,
        Flag::Blacklisted => Column::Blacklisted,
    }
}
