//! RinBot Test Utils
//!
//! Provides shared testing utilities for the bot's unit tests. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories that insert
//! user flag rows, fixtures for the `config.json` layout, and Serenity object fixtures.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::UserFlag;
//!
//! #[tokio::test]
//! async fn test_flag_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(UserFlag)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod serenity;
