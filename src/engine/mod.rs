//! Segmentation engine boundary.
//!
//! Voice activity detection and gender classification are delegated to an
//! external engine. The [`SegmentationEngine`] trait is the seam: the
//! pipeline receives an engine instance, so tests can substitute a stub.

mod command;
mod parser;

pub use command::CommandEngine;
pub use parser::parse_segments;

use crate::constants::labels;
use crate::error::Result;
use std::path::Path;

/// A labeled time interval within an audio recording.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Segment label (`male`, `female`, `music`, `noise`, `noEnergy`, ...).
    pub label: String,
    /// Start time in seconds.
    pub start: f32,
    /// End time in seconds.
    pub end: f32,
}

impl Segment {
    /// Create a segment.
    pub fn new(label: impl Into<String>, start: f32, end: f32) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    /// Whether this segment is classified speech (male or female).
    pub fn is_speech(&self) -> bool {
        self.label == labels::MALE || self.label == labels::FEMALE
    }
}

/// An engine that segments an audio file into labeled time intervals.
///
/// Implementations run voice activity detection with gender classification
/// and return segments in chronological order.
pub trait SegmentationEngine {
    /// Segment the audio file at `audio`.
    fn segment(&self, audio: &Path) -> Result<Vec<Segment>>;
}
