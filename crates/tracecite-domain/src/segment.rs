//! Typed segments of a raw transcript

use std::fmt;
use std::ops::Range;

/// Kind of a transcript segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Free-form reasoning text
    Text,
    /// A `<call_tool>` invocation
    ToolCall,
    /// A `<tool_output>` block
    ToolOutput,
}

impl SegmentKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Text => "text",
            SegmentKind::ToolCall => "tool_call",
            SegmentKind::ToolOutput => "tool_output",
        }
    }

    /// Parse a kind from its name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "text" => Some(SegmentKind::Text),
            "tool_call" | "call" => Some(SegmentKind::ToolCall),
            "tool_output" | "output" => Some(SegmentKind::ToolOutput),
            _ => None,
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One piece of the transcript, in original document order
///
/// `span` is the byte range the segment covers in the transcript it was cut
/// from: the trimmed run for `Text`, the whole tag for the other kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceSegment {
    /// Reasoning text between markup blocks (trimmed, never empty)
    Text {
        /// Trimmed text
        content: String,
        /// Byte range in the transcript
        span: Range<usize>,
    },

    /// A tool invocation
    ToolCall {
        /// Body between the opening and closing tags
        content: String,
        /// Value of the `name` attribute
        tool_name: String,
        /// Remaining attributes, in source order
        params: Vec<(String, String)>,
        /// Byte range in the transcript
        span: Range<usize>,
    },

    /// Output returned to the model by a tool
    ToolOutput {
        /// Body between the opening and closing tags
        content: String,
        /// Byte range in the transcript
        span: Range<usize>,
    },
}

impl TraceSegment {
    /// Kind of this segment
    pub fn kind(&self) -> SegmentKind {
        match self {
            TraceSegment::Text { .. } => SegmentKind::Text,
            TraceSegment::ToolCall { .. } => SegmentKind::ToolCall,
            TraceSegment::ToolOutput { .. } => SegmentKind::ToolOutput,
        }
    }

    /// Textual content of the segment
    pub fn content(&self) -> &str {
        match self {
            TraceSegment::Text { content, .. }
            | TraceSegment::ToolCall { content, .. }
            | TraceSegment::ToolOutput { content, .. } => content,
        }
    }

    /// Byte range of the segment in its transcript
    pub fn span(&self) -> Range<usize> {
        match self {
            TraceSegment::Text { span, .. }
            | TraceSegment::ToolCall { span, .. }
            | TraceSegment::ToolOutput { span, .. } => span.clone(),
        }
    }

    /// Tool name for `ToolCall` segments
    pub fn tool_name(&self) -> Option<&str> {
        match self {
            TraceSegment::ToolCall { tool_name, .. } => Some(tool_name),
            _ => None,
        }
    }

    /// Look up a tool-call parameter by key
    pub fn param(&self, key: &str) -> Option<&str> {
        match self {
            TraceSegment::ToolCall { params, .. } => params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Human-readable label, e.g. `tool_call(google_search)`
    pub fn label(&self) -> String {
        match self.tool_name() {
            Some(name) => format!("{}({})", self.kind(), name),
            None => self.kind().to_string(),
        }
    }
}
