//! Fixtures for the bot's `config.json` file layout.
//!
//! Produces JSON values rather than typed configs so the bot crate's own deserializer is
//! exercised by tests that write these to disk.

use serde_json::{json, Value};

/// Default test command prefix.
pub const DEFAULT_PREFIX: &str = "!";

/// Default test bot token.
pub const DEFAULT_TOKEN: &str = "test-token";

/// Creates a config document with the given owners and no joined guilds.
///
/// # Arguments
/// - `owners` - Owner user IDs, written as strings like the real file
pub fn json(owners: &[&str]) -> Value {
    json_with_guilds(owners, &[])
}

/// Creates a config document with the given owners and joined guild IDs.
pub fn json_with_guilds(owners: &[&str], joined_on: &[u64]) -> Value {
    json!({
        "prefix": DEFAULT_PREFIX,
        "token": DEFAULT_TOKEN,
        "owners": owners,
        "joined_on": joined_on,
    })
}
