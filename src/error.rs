//! Error types for voxseg.

/// Result type alias for voxseg operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for voxseg.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The command line was not a valid invocation.
    #[error("{message}")]
    Usage {
        /// Usage text to show the user.
        message: String,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to open audio file.
    #[error("failed to open audio file '{path}'")]
    AudioOpen {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to decode audio.
    #[error("failed to decode audio from '{path}'")]
    AudioDecode {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No audio tracks found.
    #[error("no audio tracks found in '{path}'")]
    NoAudioTracks {
        /// Path to the audio file.
        path: std::path::PathBuf,
    },

    /// Failed to resample audio.
    #[error("failed to resample audio: {reason}")]
    Resample {
        /// Description of the resampling failure.
        reason: String,
    },

    /// Failed to write WAV file.
    #[error("failed to write WAV file '{path}'")]
    WavWrite {
        /// Path to the WAV file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// Failed to spawn the external segmentation engine.
    #[error("failed to run segmentation engine '{command}'")]
    EngineSpawn {
        /// Engine command that could not be started.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The external segmentation engine exited with a failure status.
    #[error("segmentation engine '{command}' failed ({status}): {stderr}")]
    EngineFailed {
        /// Engine command that failed.
        command: String,
        /// Exit status description.
        status: String,
        /// Captured stderr from the engine.
        stderr: String,
    },

    /// The engine produced no output file.
    #[error("segmentation engine '{command}' produced no output")]
    EngineNoOutput {
        /// Engine command that was run.
        command: String,
    },

    /// The engine output could not be parsed.
    #[error("invalid engine output at line {line}: {message}")]
    EngineOutput {
        /// 1-based line number of the offending row.
        line: usize,
        /// Description of the parse failure.
        message: String,
    },

    /// Failed to create the output file.
    #[error("failed to create output file '{path}'")]
    OutputCreate {
        /// Path to the output file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to the output file.
    #[error("failed to write output file '{path}'")]
    OutputWrite {
        /// Path to the output file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit code for this error: 1 for usage errors, 2 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 1,
            _ => 2,
        }
    }
}
