//! Segment row output.

use crate::engine::Segment;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes `label,start,end` rows to a text file.
///
/// No header, no quoting, one row per segment. Any existing file content
/// is truncated.
pub struct SegmentWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl SegmentWriter {
    /// Create a writer, truncating any existing file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| Error::OutputCreate {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Write a single segment row.
    pub fn write_segment(&mut self, segment: &Segment) -> Result<()> {
        writeln!(
            self.writer,
            "{},{},{}",
            segment.label,
            format_time(segment.start),
            format_time(segment.end)
        )
        .map_err(|e| Error::OutputWrite {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Flush buffered rows to disk.
    pub fn finalize(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| Error::OutputWrite {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Format a time value in minimal decimal form with at least one
/// fractional digit (`0.0`, `2.5`, `12.34`).
fn format_time(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
