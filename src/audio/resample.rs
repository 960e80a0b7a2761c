//! Audio resampling using rubato.

use crate::error::{Error, Result};
use audioadapter_buffers::direct::SequentialSlice;
use rubato::{Fft, FixedSync, Resampler};

/// Resample mono audio to the target sample rate.
///
/// Returns the input unchanged if already at the target rate.
pub fn resample(samples: Vec<f32>, from_rate: u32, to_rate: u32) -> Result<Vec<f32>> {
    if from_rate == to_rate {
        return Ok(samples);
    }

    let chunk_size = 1024;
    let channels = 1;

    let mut resampler = Fft::<f32>::new(
        from_rate as usize,
        to_rate as usize,
        chunk_size,
        1,
        channels,
        FixedSync::Both,
    )
    .map_err(|e| Error::Resample {
        reason: e.to_string(),
    })?;

    let frames_per_chunk = resampler.input_frames_next();
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let expected_len =
        (samples.len() as f64 * f64::from(to_rate) / f64::from(from_rate)).ceil() as usize;
    let mut output = Vec::with_capacity(expected_len + frames_per_chunk);

    let mut scratch = vec![0.0f32; frames_per_chunk];
    for chunk in samples.chunks(frames_per_chunk) {
        // The final partial chunk is zero-padded to the fixed input size.
        let input: &[f32] = if chunk.len() == frames_per_chunk {
            chunk
        } else {
            scratch[..chunk.len()].copy_from_slice(chunk);
            scratch[chunk.len()..].fill(0.0);
            &scratch
        };

        let adapter =
            SequentialSlice::new(input, channels, frames_per_chunk).map_err(|e| Error::Resample {
                reason: format!("failed to create input adapter: {e}"),
            })?;

        let resampled = resampler
            .process(&adapter, 0, None)
            .map_err(|e| Error::Resample {
                reason: e.to_string(),
            })?;

        output.extend_from_slice(&resampled.take_data());
    }

    // Drop the frames produced by the zero padding.
    output.truncate(expected_len);

    Ok(output)
}
