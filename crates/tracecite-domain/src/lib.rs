//! Tracecite Domain Layer
//!
//! This crate defines the data model shared by the annotation engine and its
//! consumers. It has no external dependencies and contains no parsing logic:
//! every type here is produced by `tracecite-extractor` and read by renderers.
//!
//! ## Key Concepts
//!
//! - **Source**: a snippet record (title, URL, excerpt) found in the trace
//! - **Citation number**: the 1-based number a cited source is shown with
//! - **Document**: a tool-call result that the final answer actually cites
//! - **Segment**: one typed piece of the raw transcript (text, call, output)
//! - **Answer span**: plain text or a citation reference in the final answer
//!
//! All derived values are immutable once built. Loading a new transcript
//! replaces the whole derived set rather than mutating it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod answer;
pub mod document;
pub mod segment;
pub mod source;

// Re-exports for convenience
pub use answer::{AnswerSpan, CitationReference};
pub use document::{synthesized_document_id, DocumentRecord, RawDocument, ToolCallRecord};
pub use segment::{SegmentKind, TraceSegment};
pub use source::{CitationNumber, CitedSource, SourceRecord};
