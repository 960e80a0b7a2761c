//! Output writing.

mod text;

pub use text::SegmentWriter;
