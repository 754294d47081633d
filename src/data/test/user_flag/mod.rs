use crate::{data::user_flag::UserFlagRepository, error::AppError};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_user_id;
mod get_all_admins;
mod get_all_blacklisted;
mod is_admin;
mod is_blacklisted;
mod set_admin;
mod set_blacklisted;
