use thiserror::Error;

/// Reasons a single extension can fail to load.
///
/// A failed extension is skipped; the remaining extensions still load.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtensionError {
    /// The extension declares a command whose name an already loaded extension uses.
    #[error("command '{command}' is already registered by extension '{owner}'")]
    DuplicateCommand { command: String, owner: String },

    /// Building the extension's commands panicked.
    #[error("extension panicked while loading: {0}")]
    Panicked(String),
}
