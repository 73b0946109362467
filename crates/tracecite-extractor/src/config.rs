//! Configuration for record loading

use serde::{Deserialize, Serialize};

/// Size limits applied when an example record is loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Maximum size of the serialized record (bytes)
    pub max_record_bytes: usize,

    /// Maximum size of `full_traces.generated_text` (bytes)
    pub max_transcript_bytes: usize,

    /// Maximum size of `final_response` (bytes)
    pub max_answer_bytes: usize,
}

impl LoaderConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_record_bytes == 0 {
            return Err("max_record_bytes must be greater than 0".to_string());
        }
        if self.max_transcript_bytes == 0 {
            return Err("max_transcript_bytes must be greater than 0".to_string());
        }
        if self.max_answer_bytes == 0 {
            return Err("max_answer_bytes must be greater than 0".to_string());
        }
        if self.max_transcript_bytes > self.max_record_bytes {
            return Err("max_transcript_bytes cannot exceed max_record_bytes".to_string());
        }
        if self.max_answer_bytes > self.max_record_bytes {
            return Err("max_answer_bytes cannot exceed max_record_bytes".to_string());
        }
        Ok(())
    }

    /// Lenient preset for very long research transcripts
    pub fn lenient() -> Self {
        Self {
            max_record_bytes: 256 * 1024 * 1024,
            max_transcript_bytes: 128 * 1024 * 1024,
            max_answer_bytes: 16 * 1024 * 1024,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_record_bytes: 32 * 1024 * 1024,
            max_transcript_bytes: 16 * 1024 * 1024,
            max_answer_bytes: 2 * 1024 * 1024,
        }
    }
}
