use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions detected before the bot connects to Discord.
#[derive(Error, Debug)]
pub enum StartupError {
    /// The media transcoder could not be found or did not run successfully.
    ///
    /// On Windows a bundled `ffmpeg.exe` is expected next to the config file, elsewhere
    /// `ffmpeg` must be runnable from `PATH`.
    #[error("'{program}' not found on this system, please install it, or if it is installed, check if it is available in PATH.")]
    TranscoderNotFound { program: String },

    /// A required working directory could not be created.
    #[error("Failed to create directory '{}': {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log file could not be opened for appending.
    #[error("Failed to open log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
