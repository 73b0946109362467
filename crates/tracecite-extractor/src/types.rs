//! Input record shape and loading

use crate::config::LoaderConfig;
use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracecite_domain::{RawDocument, ToolCallRecord};
use tracing::debug;

/// One example record as produced by the research agent
///
/// Every field defaults when absent so partially populated records still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleRecord {
    /// The question the agent was asked
    pub problem: String,

    /// Final answer containing `<cite id="...">` markers
    pub final_response: String,

    /// Full generation trace
    pub full_traces: FullTraces,
}

/// Raw trace attached to an example record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullTraces {
    /// Transcript with `<snippet>`, `<call_tool>` and `<tool_output>` markup
    pub generated_text: String,

    /// Token count reported by the generator
    pub total_tokens: u64,

    /// Tool call count reported by the generator
    pub tool_call_count: u64,

    /// Structured tool calls with their retrieved documents
    pub tool_calls: Vec<ToolCallInput>,
}

/// A tool call as serialized in the record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolCallInput {
    /// Name of the tool
    pub tool_name: String,

    /// Call identifier
    pub call_id: String,

    /// Retrieved documents, in tool order
    pub documents: Vec<DocumentInput>,
}

/// A retrieved document as serialized in the record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentInput {
    /// Tool-reported identifier
    pub id: String,

    /// Document title
    pub title: String,

    /// Document URL
    pub url: String,

    /// Retrieved excerpt
    pub snippet: String,
}

impl ExampleRecord {
    /// Parse a record from JSON, enforcing the configured size limits
    pub fn from_json(json: &str, config: &LoaderConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        if json.len() > config.max_record_bytes {
            return Err(ExtractorError::RecordTooLarge(json.len(), config.max_record_bytes));
        }

        let record: ExampleRecord = serde_json::from_str(json)?;
        record.check_limits(config)?;

        debug!(
            bytes = json.len(),
            tool_calls = record.full_traces.tool_calls.len(),
            "Loaded example record"
        );
        Ok(record)
    }

    /// Read a record from any reader (e.g. stdin)
    pub fn from_reader<R: Read>(mut reader: R, config: &LoaderConfig) -> Result<Self, ExtractorError> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        Self::from_json(&buffer, config)
    }

    /// Load a record from a JSON file
    pub fn load(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Self, ExtractorError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents, config)
    }

    /// Transcript text of the record
    pub fn transcript(&self) -> &str {
        &self.full_traces.generated_text
    }

    /// Tool calls converted to domain records
    pub fn tool_call_records(&self) -> Vec<ToolCallRecord> {
        self.full_traces
            .tool_calls
            .iter()
            .map(|call| ToolCallRecord {
                tool_name: call.tool_name.clone(),
                call_id: call.call_id.clone(),
                documents: call
                    .documents
                    .iter()
                    .map(|doc| RawDocument {
                        id: doc.id.clone(),
                        title: doc.title.clone(),
                        url: doc.url.clone(),
                        snippet: doc.snippet.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    fn check_limits(&self, config: &LoaderConfig) -> Result<(), ExtractorError> {
        let transcript_len = self.full_traces.generated_text.len();
        if transcript_len > config.max_transcript_bytes {
            return Err(ExtractorError::FieldTooLarge {
                field: "full_traces.generated_text",
                len: transcript_len,
                max: config.max_transcript_bytes,
            });
        }

        let answer_len = self.final_response.len();
        if answer_len > config.max_answer_bytes {
            return Err(ExtractorError::FieldTooLarge {
                field: "final_response",
                len: answer_len,
                max: config.max_answer_bytes,
            });
        }
        Ok(())
    }
}
