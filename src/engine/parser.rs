//! Engine output parsing.

use crate::engine::Segment;
use crate::error::{Error, Result};

/// Parse engine output into segments.
///
/// Expects one `label,start,end` row per line. Blank lines are skipped;
/// fields tolerate surrounding whitespace.
pub fn parse_segments(contents: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        let (Some(label), Some(start), Some(end), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(Error::EngineOutput {
                line: idx + 1,
                message: format!("expected 3 comma-separated fields, got '{line}'"),
            });
        };

        let start = parse_time(start, idx)?;
        let end = parse_time(end, idx)?;

        segments.push(Segment::new(label.trim(), start, end));
    }

    Ok(segments)
}

fn parse_time(field: &str, idx: usize) -> Result<f32> {
    field.trim().parse().map_err(|_| Error::EngineOutput {
        line: idx + 1,
        message: format!("invalid time value '{}'", field.trim()),
    })
}
