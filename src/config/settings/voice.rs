//! Voice dictation settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::voice::SessionOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Allow dictation at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Keep listening after the recognizer ends a session
    #[serde(default = "default_continuous")]
    pub continuous: bool,

    /// Language for transcription (auto, en, de, fr, etc.)
    #[serde(default = "default_voice_language")]
    pub language: String,

    /// Whisper model for transcription (tiny, base, small, medium, large)
    #[serde(default = "default_whisper_model")]
    pub whisper_model: String,

    /// Length of each recorded chunk (in seconds)
    #[serde(default = "default_chunk_secs")]
    pub chunk_secs: u64,

    /// Play start/stop tones
    #[serde(default = "default_cues")]
    pub cues: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_continuous() -> bool {
    true
}

fn default_voice_language() -> String {
    "auto".to_string()
}

fn default_whisper_model() -> String {
    "base".to_string()
}

fn default_chunk_secs() -> u64 {
    4
}

fn default_cues() -> bool {
    true
}

impl VoiceSettings {
    /// `~/.glyphscout/whisper-models/ggml-<model>.bin`
    pub fn model_path(&self) -> PathBuf {
        Config::global_config_dir()
            .join("whisper-models")
            .join(format!("ggml-{}.bin", self.whisper_model))
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            continuous: self.continuous,
            language: self.language.clone(),
        }
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            continuous: default_continuous(),
            language: default_voice_language(),
            whisper_model: default_whisper_model(),
            chunk_secs: default_chunk_secs(),
            cues: default_cues(),
        }
    }
}
