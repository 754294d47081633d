//! Presence check and process spawning for the external media transcoder (`ffmpeg`).

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use crate::error::startup::StartupError;

/// Name of the transcoder executable looked up on `PATH`.
pub const TRANSCODER_PROGRAM: &str = "ffmpeg";

/// A transcoder executable that was verified to exist at startup.
#[derive(Debug, Clone)]
pub struct Transcoder {
    program: PathBuf,
}

impl Transcoder {
    /// Locates `program` for this platform.
    ///
    /// Windows builds ship the executable next to the config file, so only
    /// `<base_dir>/<program>.exe` is accepted there. Everywhere else the program must be on
    /// `PATH` and `<program> -version` must exit successfully.
    ///
    /// # Returns
    /// - `Ok(Transcoder)` - The program was found
    /// - `Err(StartupError::TranscoderNotFound)` - Missing, not executable, or failed to run
    pub async fn locate_program(base_dir: &Path, program: &str) -> Result<Self, StartupError> {
        if cfg!(windows) {
            let bundled = base_dir.join(format!("{program}.exe"));
            if bundled.is_file() {
                return Ok(Self { program: bundled });
            }
            return Err(StartupError::TranscoderNotFound {
                program: format!("{program}.exe"),
            });
        }

        Self::probe(program).await
    }

    /// Runs `<program> -version` and accepts the program if it exits with status 0.
    pub async fn probe(program: impl Into<PathBuf>) -> Result<Self, StartupError> {
        let program = program.into();

        let status = tokio::process::Command::new(&program)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) if status.success() => Ok(Self { program }),
            Ok(status) => {
                tracing::debug!("{} -version exited with {}", program.display(), status);
                Err(StartupError::TranscoderNotFound {
                    program: program.display().to_string(),
                })
            }
            Err(e) => {
                tracing::debug!("Failed to run {}: {}", program.display(), e);
                Err(StartupError::TranscoderNotFound {
                    program: program.display().to_string(),
                })
            }
        }
    }

    #[cfg(test)]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Spawns the transcoder decoding `source` into a 48 kHz stereo WAV stream on stdout.
    ///
    /// Only `http://` and `https://` sources are accepted, and the transcoder is limited to
    /// network protocols, so local files on the host can never be opened.
    ///
    /// # Returns
    /// - `Ok(Child)` - The running transcoder with its stdout piped
    /// - `Err(io::Error)` - `InvalidInput` for a rejected source, or the spawn failure
    pub fn spawn_wav_stream(&self, source: &str) -> std::io::Result<Child> {
        if !is_streamable_source(source) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("unsupported source '{}'", source),
            ));
        }

        Command::new(&self.program)
            .args(wav_stream_args(source))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
    }
}

/// Whether `source` is an HTTP(S) URL the transcoder may fetch.
pub fn is_streamable_source(source: &str) -> bool {
    let lower = source.trim().to_ascii_lowercase();

    ["http://", "https://"]
        .iter()
        .any(|scheme| lower.len() > scheme.len() && lower.starts_with(scheme))
}

/// Arguments for decoding `source` to WAV on stdout.
fn wav_stream_args(source: &str) -> Vec<String> {
    [
        "-hide_banner",
        "-loglevel",
        "error",
        "-protocol_whitelist",
        "http,https,tcp,tls",
        "-i",
        source,
        "-vn",
        "-ac",
        "2",
        "-ar",
        "48000",
        "-acodec",
        "pcm_s16le",
        "-f",
        "wav",
        "pipe:1",
    ]
    .iter()
    .map(|arg| arg.to_string())
    .collect()
}
