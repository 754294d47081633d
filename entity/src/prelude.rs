pub use super::user_flag::Entity as UserFlag;
