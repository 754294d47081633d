//! Domain models used between the data layer and the rest of the bot.

pub mod user_flag;
