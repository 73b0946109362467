//! Tracecite Extractor
//!
//! Derives citation and transcript structure from a research-agent example
//! record.
//!
//! # Overview
//!
//! An example record holds a final answer with inline `<cite>` markers and a
//! raw transcript interleaving reasoning text with `<snippet>`, `<call_tool>`
//! and `<tool_output>` markup. The extractor turns that into a numbered,
//! de-duplicated source list, the cited tool-call documents, a typed
//! transcript breakdown and the answer split into text and citation spans.
//!
//! # Architecture
//!
//! ```text
//! transcript ─┬─ extract_snippets ──┐
//!             │                     ├─ resolve_sources ── inline_citations
//! answer ─────┼─ collect_cited_ids ─┤
//!             │                     └─ correlate_documents (+ tool calls)
//!             └─ segment_transcript
//! ```
//!
//! Every stage is a pure function. Malformed markup is skipped, never an
//! error; only loading a record can fail.
//!
//! # Example Usage
//!
//! ```
//! use tracecite_extractor::{annotate, render_answer_plain, ExampleRecord, LoaderConfig};
//!
//! let json = r#"{
//!     "final_response": "Rust is <cite id=\"s1\">memory safe</cite>.",
//!     "full_traces": {
//!         "generated_text": "<snippet id=s1>\nTitle: Rust\nURL: https://rust-lang.org\nSnippet: Safe.\n</snippet>"
//!     }
//! }"#;
//!
//! let record = ExampleRecord::from_json(json, &LoaderConfig::default()).unwrap();
//! let trace = annotate(&record);
//!
//! assert_eq!(trace.sources.len(), 1);
//! assert_eq!(render_answer_plain(&trace.answer), "Rust is memory safe[1].");
//! ```

#![warn(missing_docs)]

mod annotate;
mod citations;
mod config;
mod documents;
mod error;
mod inline;
mod markup;
mod segments;
mod snippets;
mod sources;
mod types;

#[cfg(test)]
mod tests;

pub use annotate::{annotate, render_answer_plain, AnnotatedTrace, TraceSummary};
pub use citations::{collect_cited_ids, CitedIds};
pub use config::LoaderConfig;
pub use documents::correlate_documents;
pub use error::ExtractorError;
pub use inline::inline_citations;
pub use segments::segment_transcript;
pub use snippets::extract_snippets;
pub use sources::resolve_sources;
pub use types::{DocumentInput, ExampleRecord, FullTraces, ToolCallInput};
