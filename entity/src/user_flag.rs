//! `SeaORM` Entity for user_flag
use sea_orm::entity::prelude::*;

/// Per-user authorization flags.
///
/// A row exists only while at least one flag is set.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "user_flag")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub admin: bool,
    pub blacklisted: bool,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
