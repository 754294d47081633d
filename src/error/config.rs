use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file does not exist.
    ///
    /// Copy the example config next to the binary (or into `RINBOT_HOME`) and fill in the
    /// token and owners.
    #[error("'{}' not found.", path.display())]
    NotFound { path: PathBuf },

    /// The config file exists but could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON or is missing a required field.
    #[error("Failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing or writing the updated config back to disk failed.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
