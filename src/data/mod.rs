//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models from `model`,
//! so the rest of the bot never sees string-typed IDs.

pub mod user_flag;

#[cfg(test)]
mod test;
