//! SeaORM entities for the RinBot database.

pub mod prelude;

pub mod user_flag;
