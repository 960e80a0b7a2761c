//! Application-wide constants.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "voxseg";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "VOXSEG_CONFIG";

/// Default external segmentation engine executable.
pub const DEFAULT_ENGINE_COMMAND: &str = "ina_speech_segmenter";

/// Default sample rate for prepared audio handed to the engine.
///
/// inaSpeechSegmenter-compatible engines operate on 16 kHz mono input.
pub const DEFAULT_SAMPLE_RATE: u32 = 16_000;

/// Segment labels emitted by inaSpeechSegmenter-compatible engines.
///
/// The engine also emits non-speech labels (`music`, `noise`, `noEnergy`);
/// those are passed through untouched and have no constants here.
pub mod labels {
    /// Male speech.
    pub const MALE: &str = "male";
    /// Female speech.
    pub const FEMALE: &str = "female";
}
