//! Configuration type definitions.

use crate::constants::{DEFAULT_ENGINE_COMMAND, DEFAULT_SAMPLE_RATE};
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External segmentation engine settings.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Audio preparation settings.
    #[serde(default)]
    pub audio: AudioConfig,
}

/// External segmentation engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Engine executable to invoke.
    pub command: String,

    /// Extra arguments inserted before the input and output paths.
    pub args: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_ENGINE_COMMAND.to_string(),
            args: Vec::new(),
        }
    }
}

/// Audio preparation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Decode and resample the input to a temporary WAV before invoking
    /// the engine. When false the engine receives the input path as-is.
    pub convert: bool,

    /// Target sample rate for prepared audio.
    pub sample_rate: u32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            convert: false,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}
