//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Export speech and gender segments from an audio file.
///
/// Runs an external segmentation engine (voice activity detection with
/// gender classification) against a single recording and writes one
/// `label,start,end` row per segment to the output file.
#[derive(Debug, Parser)]
#[command(name = "voxseg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input audio file to segment.
    pub input: PathBuf,

    /// Output text file for segment rows (overwritten if present).
    pub output: PathBuf,
}

/// Rewrite backslash path separators to forward slashes.
///
/// The external engine expects forward slashes regardless of the platform
/// the path was typed on.
pub fn normalize_separators(path: &std::path::Path) -> PathBuf {
    PathBuf::from(path.to_string_lossy().replace('\\', "/"))
}
