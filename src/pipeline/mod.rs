//! Segment export pipeline.

use crate::cli::normalize_separators;
use crate::config::AudioConfig;
use crate::engine::SegmentationEngine;
use crate::error::Result;
use crate::output::SegmentWriter;
use std::path::Path;
use tracing::{debug, info};

/// Result of a segment export run.
#[derive(Debug)]
pub struct ExportResult {
    /// Number of segments written.
    pub segments: usize,
}

/// Run the engine against `input` and write one row per segment to `output`.
///
/// Backslash separators in both paths are rewritten to forward slashes
/// before use. When audio conversion is enabled the input is decoded,
/// downmixed, resampled, and handed to the engine as a temporary WAV;
/// otherwise the engine receives the input path untouched.
pub fn export_segments(
    input: &Path,
    output: &Path,
    engine: &dyn SegmentationEngine,
    audio: &AudioConfig,
) -> Result<ExportResult> {
    let input = normalize_separators(input);
    let output = normalize_separators(output);

    info!("Segmenting: {}", input.display());

    // Keeps the temporary WAV alive for the duration of the engine call.
    let _tmp_dir;
    let engine_input = if audio.convert {
        let (dir, prepared) = prepare_audio(&input, audio.sample_rate)?;
        _tmp_dir = dir;
        prepared
    } else {
        input
    };

    let segments = engine.segment(&engine_input)?;
    info!("Engine returned {} segment(s)", segments.len());

    let mut writer = SegmentWriter::create(&output)?;
    for segment in &segments {
        writer.write_segment(segment)?;
    }
    writer.finalize()?;

    info!(
        "Wrote {} row(s) to {}",
        segments.len(),
        output.display()
    );

    Ok(ExportResult {
        segments: segments.len(),
    })
}

/// Decode and resample the input into a temporary mono WAV.
fn prepare_audio(
    input: &Path,
    sample_rate: u32,
) -> Result<(tempfile::TempDir, std::path::PathBuf)> {
    let decoded = crate::audio::decode_audio_file(input)?;
    info!(
        "Decoded {:.1}s of audio at {} Hz",
        decoded.duration_secs, decoded.sample_rate
    );

    let samples = if decoded.sample_rate == sample_rate {
        decoded.samples
    } else {
        debug!(
            "Resampling from {} Hz to {} Hz",
            decoded.sample_rate, sample_rate
        );
        crate::audio::resample(decoded.samples, decoded.sample_rate, sample_rate)?
    };

    let dir = tempfile::tempdir()?;
    let wav_path = dir.path().join("prepared.wav");
    crate::audio::write_wav_file(&wav_path, &samples, sample_rate)?;

    Ok((dir, wav_path))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::engine::Segment;
    use crate::error::Error;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Deterministic stub engine that records the path it was handed.
    struct StubEngine {
        segments: Vec<Segment>,
        seen_path: RefCell<Option<PathBuf>>,
    }

    impl StubEngine {
        fn new(segments: Vec<Segment>) -> Self {
            Self {
                segments,
                seen_path: RefCell::new(None),
            }
        }
    }

    impl SegmentationEngine for StubEngine {
        fn segment(&self, audio: &Path) -> Result<Vec<Segment>> {
            *self.seen_path.borrow_mut() = Some(audio.to_path_buf());
            Ok(self.segments.clone())
        }
    }

    struct FailingEngine;

    impl SegmentationEngine for FailingEngine {
        fn segment(&self, _audio: &Path) -> Result<Vec<Segment>> {
            Err(Error::EngineNoOutput {
                command: "stub".to_string(),
            })
        }
    }

    fn two_speech_segments() -> Vec<Segment> {
        vec![
            Segment::new("male", 0.0, 2.5),
            Segment::new("female", 2.5, 5.0),
        ]
    }

    #[test]
    fn test_export_writes_expected_rows() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let engine = StubEngine::new(two_speech_segments());

        let result =
            export_segments(Path::new("in.wav"), &output, &engine, &AudioConfig::default())
                .unwrap();

        assert_eq!(result.segments, 2);
        let contents = std::fs::read_to_string(&output).unwrap();
        assert_eq!(contents, "male,0.0,2.5\nfemale,2.5,5.0\n");
    }

    #[test]
    fn test_export_line_count_matches_segment_count() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let segments = vec![
            Segment::new("noEnergy", 0.0, 0.8),
            Segment::new("male", 0.8, 4.2),
            Segment::new("music", 4.2, 9.0),
        ];
        let engine = StubEngine::new(segments);

        export_segments(Path::new("in.wav"), &output, &engine, &AudioConfig::default()).unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_export_normalizes_backslash_input_path() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let engine = StubEngine::new(vec![]);

        export_segments(
            Path::new("C:\\audio\\in.wav"),
            &output,
            &engine,
            &AudioConfig::default(),
        )
        .unwrap();

        assert_eq!(
            engine.seen_path.borrow().clone(),
            Some(PathBuf::from("C:/audio/in.wav"))
        );
    }

    #[test]
    fn test_export_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let engine = StubEngine::new(two_speech_segments());

        export_segments(Path::new("in.wav"), &output, &engine, &AudioConfig::default()).unwrap();
        let first = std::fs::read(&output).unwrap();

        export_segments(Path::new("in.wav"), &output, &engine, &AudioConfig::default()).unwrap();
        let second = std::fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_export_empty_segments_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let engine = StubEngine::new(vec![]);

        let result =
            export_segments(Path::new("in.wav"), &output, &engine, &AudioConfig::default())
                .unwrap();

        assert_eq!(result.segments, 0);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_engine_failure_leaves_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");

        let result = export_segments(
            Path::new("in.wav"),
            &output,
            &FailingEngine,
            &AudioConfig::default(),
        );

        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_hands_prepared_wav_to_engine() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.wav");
        let output = dir.path().join("out.txt");

        // 0.25s of 48 kHz mono audio
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 48_000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut wav = hound::WavWriter::create(&input, spec).unwrap();
        for i in 0..12_000i32 {
            #[allow(clippy::cast_possible_truncation)]
            wav.write_sample((i % 500) as i16).unwrap();
        }
        wav.finalize().unwrap();

        let engine = StubEngine::new(two_speech_segments());
        let audio = AudioConfig {
            convert: true,
            sample_rate: 16_000,
        };

        // The stub checks the prepared file while the engine call is live,
        // because the temp WAV is cleaned up when export returns.
        struct CheckingEngine;
        impl SegmentationEngine for CheckingEngine {
            fn segment(&self, audio: &Path) -> Result<Vec<Segment>> {
                assert!(audio.to_string_lossy().ends_with("prepared.wav"));
                let reader = hound::WavReader::open(audio).map_err(|e| Error::AudioOpen {
                    path: audio.to_path_buf(),
                    source: Box::new(e),
                })?;
                assert_eq!(reader.spec().channels, 1);
                assert_eq!(reader.spec().sample_rate, 16_000);
                // 0.25s at 16 kHz, allowing for resampler chunking
                assert!((i64::from(reader.len()) - 4_000).abs() < 1_100);
                Ok(vec![])
            }
        }

        export_segments(&input, &output, &CheckingEngine, &audio).unwrap();

        // And the plain stub confirms the original path is not handed over.
        export_segments(&input, &output, &engine, &audio).unwrap();
        let seen = engine.seen_path.borrow().clone().unwrap();
        assert_ne!(seen, input);
    }
}
