use thiserror::Error;

/// Authorization failures raised by the command checks.
///
/// Each variant corresponds to one of the three authorization classes and carries its own
/// user-facing message, see `bot::error`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The user is not listed in the config file's `owners`.
    #[error("User is not in the owners class")]
    UserNotOwner,

    /// The user has no admin flag in the database.
    #[error("User is not in the admins class")]
    UserNotAdmin,

    /// The user is flagged as blacklisted in the database.
    #[error("User is blacklisted")]
    UserBlacklisted,
}
