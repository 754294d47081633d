use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::{ConfigStore, Environment},
    error::{startup::StartupError, AppError},
    transcoder::{Transcoder, TRANSCODER_PROGRAM},
};

/// Process argument passed by the `reset` command to the replacement process.
pub const RESET_ARG: &str = "reset";

/// Time given to the previous instance to log out before the new one connects.
pub const RESET_DELAY: Duration = Duration::from_secs(5);

/// Working directories created on startup, relative to the base directory.
pub const REQUIRED_DIRECTORIES: [&str; 3] = ["music/cache", "log", "database"];

const LOG_FILE: &str = "log/rinbot.log";
const DEFAULT_LOG_FILTER: &str = "info,serenity=warn,songbird=warn,sqlx=warn";

/// Whether the process was started by the `reset` command.
///
/// Only the first argument after the program name is considered.
pub fn is_reset<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    args.into_iter().nth(1).as_deref() == Some(RESET_ARG)
}

/// Sleeps for [`RESET_DELAY`] so the instance that spawned us can shut down first.
pub async fn wait_for_previous_instance() {
    tracing::info!("Coming from a reset, waiting for previous instance to finish...");
    tokio::time::sleep(RESET_DELAY).await;
}

/// Creates any missing working directories under `base_dir`.
///
/// Runs before logging is initialized, so the created paths are returned for the caller
/// to log afterwards.
///
/// # Returns
/// - `Ok(Vec<PathBuf>)` - Directories that did not exist and were created
/// - `Err(StartupError::Directory)` - A directory could not be created
pub fn ensure_directories(base_dir: &Path) -> Result<Vec<PathBuf>, StartupError> {
    let mut created = Vec::new();

    for folder in REQUIRED_DIRECTORIES {
        let path = base_dir.join(folder);
        if path.is_dir() {
            continue;
        }

        std::fs::create_dir_all(&path).map_err(|source| StartupError::Directory {
            path: path.clone(),
            source,
        })?;
        created.push(path);
    }

    Ok(created)
}

/// Installs the global tracing subscriber.
///
/// Events go to stdout and are appended, without ANSI colors, to `log/rinbot.log`. The
/// filter comes from `RUST_LOG` and falls back to `info` with the chattier dependencies
/// turned down to `warn`.
pub fn init_logging(base_dir: &Path) -> Result<(), StartupError> {
    let path = base_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| StartupError::LogFile { path, source })?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();

    Ok(())
}

/// Loads the config file and verifies the transcoder is available.
///
/// Both are fatal when missing. The config is checked first so a fresh checkout without a
/// config reports that before anything else.
pub async fn check_environment(
    environment: &Environment,
) -> Result<(ConfigStore, Transcoder), AppError> {
    check_environment_with(environment, TRANSCODER_PROGRAM).await
}

async fn check_environment_with(
    environment: &Environment,
    transcoder_program: &str,
) -> Result<(ConfigStore, Transcoder), AppError> {
    let config = ConfigStore::load(&environment.config_path)?;
    let transcoder =
        Transcoder::locate_program(&environment.base_dir, transcoder_program).await?;

    Ok((config, transcoder))
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the database URL from the environment, then runs
/// all pending SeaORM migrations so the `user_flag` table exists before any check queries
/// it.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(
    environment: &Environment,
) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&environment.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{config::ConfigError, startup::StartupError};
    use test_utils::fixture;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn reset_requires_first_argument() {
        assert!(is_reset(args(&["rinbot", "reset"])));
        assert!(!is_reset(args(&["rinbot"])));
        assert!(!is_reset(args(&["rinbot", "--verbose", "reset"])));
        assert!(!is_reset(args(&["rinbot", "RESET"])));
    }

    #[test]
    fn creates_missing_directories_once() {
        let dir = tempfile::tempdir().unwrap();

        let created = ensure_directories(dir.path()).unwrap();
        assert_eq!(created.len(), REQUIRED_DIRECTORIES.len());
        assert!(dir.path().join("music/cache").is_dir());
        assert!(dir.path().join("log").is_dir());

        let created_again = ensure_directories(dir.path()).unwrap();
        assert!(created_again.is_empty());
    }

    #[tokio::test]
    async fn missing_config_aborts_startup() {
        let dir = tempfile::tempdir().unwrap();
        let environment = Environment::from_base(dir.path());

        let result = check_environment_with(&environment, "rinbot-no-such-transcoder").await;

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::NotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn missing_transcoder_aborts_startup() {
        let dir = tempfile::tempdir().unwrap();
        let environment = Environment::from_base(dir.path());
        std::fs::write(
            &environment.config_path,
            fixture::config::json(&["111"]).to_string(),
        )
        .unwrap();

        let result = check_environment_with(&environment, "rinbot-no-such-transcoder").await;

        assert!(matches!(
            result,
            Err(AppError::StartupErr(StartupError::TranscoderNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn database_schema_is_created_by_migrations() -> Result<(), AppError> {
        use crate::data::user_flag::UserFlagRepository;

        let environment = Environment {
            database_url: "sqlite::memory:".to_string(),
            ..Environment::from_base("/unused")
        };

        let db = connect_to_database(&environment).await?;
        let repo = UserFlagRepository::new(&db);
        repo.set_admin(5, true).await?;

        assert!(repo.is_admin(5).await?);

        Ok(())
    }
}
