//! Factory methods for creating test data.
//!
//! Each factory inserts a row with sensible defaults and offers a builder for the fields a
//! test cares about.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let admin = factory::user_flag::UserFlagFactory::new(&db)
//!     .user_id("987654321")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let blocked = factory::create_blacklisted_user(&db, "123").await?;
//! ```

pub mod helpers;
pub mod user_flag;

pub use user_flag::{create_admin, create_blacklisted_user};
