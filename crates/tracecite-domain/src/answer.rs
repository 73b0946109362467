//! Renderable spans of the final answer

use crate::source::{CitationNumber, CitedSource};

/// A citation marker resolved against the numbered sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationReference {
    /// Text the marker annotates (shown to the reader)
    pub text: String,

    /// Identifiers listed in the marker's `id` attribute, in marker order
    pub ids: Vec<String>,

    /// Resolved sources, in citation-number order; empty when nothing resolved
    pub sources: Vec<CitedSource>,
}

impl CitationReference {
    /// Citation numbers of the resolved sources
    pub fn numbers(&self) -> Vec<CitationNumber> {
        self.sources.iter().map(|s| s.number).collect()
    }

    /// Whether no listed identifier resolved to a source
    pub fn is_unresolved(&self) -> bool {
        self.sources.is_empty()
    }
}

/// One span of the inlined answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSpan {
    /// Literal text between markers
    Text(String),

    /// A citation marker
    Citation(CitationReference),
}

impl AnswerSpan {
    /// Visible text of the span
    pub fn display_text(&self) -> &str {
        match self {
            AnswerSpan::Text(text) => text,
            AnswerSpan::Citation(reference) => &reference.text,
        }
    }
}
