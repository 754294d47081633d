//! Process settings and the persisted `config.json`.
//!
//! Two layers of configuration exist. `Environment` is resolved from environment variables
//! (after loading `.env`) and says *where* things live. `BotConfig` is the JSON document the
//! bot's operators edit: command prefix, token, owner list and the guilds the bot has joined.
//! The document is shared at runtime through `ConfigStore`, which is also the only writer of
//! the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::{config::ConfigError, AppError};

const CONFIG_FILE_NAME: &str = "config.json";
const DATABASE_FILE: &str = "database/database.db";

/// Environment variable overriding the directory the bot keeps its files in.
const HOME_VAR: &str = "RINBOT_HOME";
const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Filesystem layout and connection settings resolved at startup.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Directory holding `config.json`, `log/`, `database/` and `music/cache/`.
    pub base_dir: PathBuf,
    pub config_path: PathBuf,
    pub database_url: String,
}

impl Environment {
    /// Resolves the environment from `RINBOT_HOME` and `DATABASE_URL`.
    ///
    /// Both are optional: the base directory defaults to the current working directory and
    /// the database defaults to a SQLite file under `<base>/database/`.
    pub fn from_env() -> Result<Self, AppError> {
        let base_dir = match std::env::var(HOME_VAR) {
            Ok(home) if !home.trim().is_empty() => PathBuf::from(home),
            _ => std::env::current_dir()?,
        };

        let mut environment = Self::from_base(base_dir);
        if let Ok(url) = std::env::var(DATABASE_URL_VAR) {
            environment.database_url = url;
        }

        Ok(environment)
    }

    /// Builds the default layout rooted at `base_dir`.
    pub fn from_base(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let config_path = base_dir.join(CONFIG_FILE_NAME);
        let database_url = format!(
            "sqlite://{}?mode=rwc",
            base_dir.join(DATABASE_FILE).display()
        );

        Self {
            base_dir,
            config_path,
            database_url,
        }
    }
}

/// Contents of `config.json`.
///
/// Keys the bot does not know about are kept in `extra` so rewriting the file after a guild
/// join does not drop them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Prefix for text commands. Mentioning the bot works as a prefix as well.
    pub prefix: String,
    pub token: String,
    /// User IDs of the `owners` class, stored as strings.
    #[serde(default)]
    pub owners: Vec<String>,
    /// Guild IDs joined while the bot was running, in join order.
    #[serde(default)]
    pub joined_on: Vec<u64>,
    /// Extensions to skip at load time.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_extensions: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BotConfig {
    /// Whether `user_id` appears in the owner list.
    pub fn is_owner(&self, user_id: u64) -> bool {
        let user_id = user_id.to_string();
        self.owners.iter().any(|owner| owner.trim() == user_id)
    }

    /// Serializes the config with the 4-space indentation operators are used to.
    fn to_pretty_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

/// Shared, file-backed handle to the bot config.
///
/// Reads go through an async `RwLock`; `record_guild_join` holds the write lock while it
/// rewrites the file so concurrent joins cannot interleave their writes.
pub struct ConfigStore {
    path: PathBuf,
    config: RwLock<BotConfig>,
}

impl ConfigStore {
    /// Reads and parses the config file at `path`.
    ///
    /// # Returns
    /// - `Ok(ConfigStore)` - Parsed config
    /// - `Err(ConfigError::NotFound)` - The file does not exist
    /// - `Err(ConfigError::Read)` - The file exists but could not be read
    /// - `Err(ConfigError::Parse)` - The file is not a valid config document
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();

        if !path.is_file() {
            return Err(ConfigError::NotFound { path });
        }

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config = match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(source) => return Err(ConfigError::Parse { path, source }),
        };

        Ok(Self::new(path, config))
    }

    /// Wraps an already parsed config that will be persisted to `path`.
    pub fn new(path: impl Into<PathBuf>, config: BotConfig) -> Self {
        Self {
            path: path.into(),
            config: RwLock::new(config),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns a copy of the current config.
    pub async fn snapshot(&self) -> BotConfig {
        self.config.read().await.clone()
    }

    pub async fn is_owner(&self, user_id: u64) -> bool {
        self.config.read().await.is_owner(user_id)
    }

    /// Appends `guild_id` to `joined_on` and rewrites the config file.
    ///
    /// Recording the same guild twice is a no-op. If writing the file fails the in-memory
    /// list is rolled back, so a later join event can retry.
    ///
    /// # Returns
    /// - `Ok(true)` - Guild was appended and the file rewritten
    /// - `Ok(false)` - Guild was already recorded
    /// - `Err(ConfigError::Write)` - Serializing or writing the file failed
    pub async fn record_guild_join(&self, guild_id: u64) -> Result<bool, ConfigError> {
        let mut config = self.config.write().await;

        if config.joined_on.contains(&guild_id) {
            return Ok(false);
        }

        config.joined_on.push(guild_id);

        let written = match config.to_pretty_json() {
            Ok(bytes) => tokio::fs::write(&self.path, bytes).await,
            Err(e) => Err(std::io::Error::from(e)),
        };

        if let Err(source) = written {
            config.joined_on.pop();
            return Err(ConfigError::Write {
                path: self.path.clone(),
                source,
            });
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    fn write_config(dir: &Path, value: &serde_json::Value) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
        path
    }

    #[test]
    fn load_fails_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();

        let result = ConfigStore::load(dir.path().join(CONFIG_FILE_NAME));

        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn load_fails_on_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ \"prefix\": ").unwrap();

        let result = ConfigStore::load(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[tokio::test]
    async fn load_reads_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            &fixture::config::json_with_guilds(&["111"], &[42]),
        );

        let store = ConfigStore::load(&path).unwrap();
        let config = store.snapshot().await;

        assert_eq!(config.prefix, fixture::config::DEFAULT_PREFIX);
        assert_eq!(config.token, fixture::config::DEFAULT_TOKEN);
        assert_eq!(config.owners, vec!["111".to_string()]);
        assert_eq!(config.joined_on, vec![42]);
        assert!(config.disabled_extensions.is_empty());
    }

    #[tokio::test]
    async fn owner_check_matches_string_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), &fixture::config::json(&["111", " 222 "]));
        let store = ConfigStore::load(&path).unwrap();

        assert!(store.is_owner(111).await);
        assert!(store.is_owner(222).await);
        assert!(!store.is_owner(333).await);
    }

    #[tokio::test]
    async fn guild_join_is_persisted_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), &fixture::config::json(&["111"]));
        let store = ConfigStore::load(&path).unwrap();

        assert!(store.record_guild_join(900).await.unwrap());
        assert!(!store.record_guild_join(900).await.unwrap());

        let reloaded = ConfigStore::load(&path).unwrap().snapshot().await;
        assert_eq!(reloaded.joined_on, vec![900]);
    }

    #[tokio::test]
    async fn guild_join_keeps_order_and_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut value = fixture::config::json_with_guilds(&["111"], &[1]);
        value["activity"] = serde_json::json!("listening");
        let path = write_config(dir.path(), &value);
        let store = ConfigStore::load(&path).unwrap();

        store.record_guild_join(2).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let written: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(written["joined_on"], serde_json::json!([1, 2]));
        assert_eq!(written["activity"], "listening");
        assert!(raw.contains("\n    \"prefix\""));
    }

    #[tokio::test]
    async fn failed_write_rolls_back_join() {
        let dir = tempfile::tempdir().unwrap();
        let config: BotConfig =
            serde_json::from_value(fixture::config::json(&["111"])).unwrap();
        let store = ConfigStore::new(dir.path().join("missing").join(CONFIG_FILE_NAME), config);

        let result = store.record_guild_join(7).await;

        assert!(matches!(result, Err(ConfigError::Write { .. })));
        assert!(store.snapshot().await.joined_on.is_empty());
    }

    #[test]
    fn environment_defaults_live_under_base_dir() {
        let environment = Environment::from_base("/srv/rinbot");

        assert_eq!(
            environment.config_path,
            PathBuf::from("/srv/rinbot/config.json")
        );
        assert_eq!(
            environment.database_url,
            "sqlite:///srv/rinbot/database/database.db?mode=rwc"
        );
    }
}
