use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// User IDs are stored as strings; a row that does not parse back means the table was
    /// edited by hand or written by a buggy query.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// The songbird voice manager was not registered on the client.
    #[error("Voice client was not initialised")]
    VoiceManagerMissing,
}
