//! External segmentation engine invocation.

use crate::config::EngineConfig;
use crate::engine::{Segment, SegmentationEngine, parse_segments};
use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Engine implementation that shells out to an external command.
///
/// The engine is invoked as `<command> [args...] <input> <output>` and is
/// expected to write `label,start,end` rows to the output path. This matches
/// the inaSpeechSegmenter CLI contract (VAD engine `smn`, gender detection
/// enabled).
pub struct CommandEngine {
    command: String,
    args: Vec<String>,
}

impl CommandEngine {
    /// Create an engine from configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
        }
    }

    /// Create an engine invoking `command` with no extra arguments.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }
}

impl SegmentationEngine for CommandEngine {
    fn segment(&self, audio: &Path) -> Result<Vec<Segment>> {
        let tmp_dir = tempfile::tempdir()?;
        let tmp_out = tmp_dir.path().join("segments.txt");

        info!("Running segmentation engine: {}", self.command);
        debug!(
            "Engine invocation: {} {:?} {} {}",
            self.command,
            self.args,
            audio.display(),
            tmp_out.display()
        );

        let output = Command::new(&self.command)
            .args(&self.args)
            .arg(audio)
            .arg(&tmp_out)
            .output()
            .map_err(|e| Error::EngineSpawn {
                command: self.command.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(Error::EngineFailed {
                command: self.command.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if !tmp_out.exists() {
            return Err(Error::EngineNoOutput {
                command: self.command.clone(),
            });
        }

        let contents = std::fs::read_to_string(&tmp_out)?;
        let segments = parse_segments(&contents)?;
        debug!("Engine returned {} segments", segments.len());

        Ok(segments)
    }
}
