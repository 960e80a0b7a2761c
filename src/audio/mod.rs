//! Audio preparation pipeline.

mod decode;
mod resample;
mod writer;

pub use decode::{DecodedAudio, decode_audio_file};
pub use resample::resample;
pub use writer::write_wav_file;
