//! The annotation pipeline over one example record

use crate::citations::collect_cited_ids;
use crate::documents::correlate_documents;
use crate::inline::inline_citations;
use crate::segments::segment_transcript;
use crate::snippets::extract_snippets;
use crate::sources::resolve_sources;
use crate::types::ExampleRecord;
use std::collections::HashSet;
use tracecite_domain::{AnswerSpan, CitedSource, DocumentRecord, SegmentKind, TraceSegment};
use tracing::{info, warn};

/// Everything derived from one example record
///
/// Built fresh by [`annotate`]; never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedTrace {
    /// Numbered sources, in citation-number order
    pub sources: Vec<CitedSource>,

    /// Cited tool-call documents, in tool-call order
    pub documents: Vec<DocumentRecord>,

    /// Transcript breakdown, in document order
    pub segments: Vec<TraceSegment>,

    /// The answer as text and citation spans
    pub answer: Vec<AnswerSpan>,

    /// Counts describing the record and what resolved
    pub summary: TraceSummary,
}

/// Counts describing one annotation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceSummary {
    /// The question the agent was asked
    pub problem: String,

    /// Token count declared by the record
    pub total_tokens: u64,

    /// Tool call count declared by the record
    pub tool_call_count: u64,

    /// `ToolCall` segments found in the transcript
    pub observed_tool_calls: usize,

    /// Distinct snippet ids in the transcript
    pub snippet_count: usize,

    /// Distinct ids cited by the answer
    pub cited_id_count: usize,

    /// Cited ids that resolved to a snippet
    pub resolved_source_count: usize,

    /// Cited tool-call documents
    pub document_count: usize,

    /// Cited ids matching neither a snippet nor a tool-call document
    pub dangling_citation_ids: Vec<String>,
}

/// Run every derivation over `record`
///
/// Each derived structure comes from its own pure function of the record;
/// none of them share state.
pub fn annotate(record: &ExampleRecord) -> AnnotatedTrace {
    let transcript = record.transcript();
    let tool_calls = record.tool_call_records();

    let snippets = extract_snippets(transcript);
    let cited = collect_cited_ids(&record.final_response);
    let sources = resolve_sources(&cited, &snippets);
    let documents = correlate_documents(&cited, &tool_calls);
    let segments = segment_transcript(transcript);
    let answer = inline_citations(&record.final_response, &sources);

    let document_ids: HashSet<String> = tool_calls.iter().flat_map(|c| c.document_ids()).collect();
    let dangling_citation_ids: Vec<String> = cited
        .iter()
        .filter(|id| !snippets.contains_key(*id) && !document_ids.contains(*id))
        .cloned()
        .collect();
    if !dangling_citation_ids.is_empty() {
        warn!(ids = ?dangling_citation_ids, "Citations reference unknown ids");
    }

    let summary = TraceSummary {
        problem: record.problem.clone(),
        total_tokens: record.full_traces.total_tokens,
        tool_call_count: record.full_traces.tool_call_count,
        observed_tool_calls: segments
            .iter()
            .filter(|s| s.kind() == SegmentKind::ToolCall)
            .count(),
        snippet_count: snippets.len(),
        cited_id_count: cited.len(),
        resolved_source_count: sources.len(),
        document_count: documents.len(),
        dangling_citation_ids,
    };

    info!(
        sources = summary.resolved_source_count,
        documents = summary.document_count,
        segments = segments.len(),
        "Annotated trace"
    );

    AnnotatedTrace {
        sources,
        documents,
        segments,
        answer,
        summary,
    }
}

/// Render answer spans as plain text with `[n]` markers
///
/// A citation span that resolved to nothing is marked `[?]`.
pub fn render_answer_plain(spans: &[AnswerSpan]) -> String {
    let mut out = String::new();

    for span in spans {
        match span {
            AnswerSpan::Text(text) => out.push_str(text),
            AnswerSpan::Citation(reference) => {
                out.push_str(&reference.text);
                if reference.is_unresolved() {
                    out.push_str("[?]");
                }
                for number in reference.numbers() {
                    out.push_str(&format!("[{}]", number));
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DocumentInput, FullTraces, ToolCallInput};

    fn record() -> ExampleRecord {
        ExampleRecord {
            problem: "Why?".to_string(),
            final_response: r#"See <cite id="a,b">this</cite> and <cite id="a">also</cite>."#
                .to_string(),
            full_traces: FullTraces {
                generated_text: "<snippet id=a>\nTitle: Source A\nURL: https://a\nSnippet: aa\n</snippet>\n\
                                 <snippet id=b>\nTitle: Source B\nURL: https://b\nSnippet: bb\n</snippet>"
                    .to_string(),
                total_tokens: 10,
                tool_call_count: 0,
                tool_calls: Vec::new(),
            },
        }
    }

    #[test]
    fn test_render_plain_markers() {
        let trace = annotate(&record());
        assert_eq!(render_answer_plain(&trace.answer), "See this[1][2] and also[1].");
    }

    #[test]
    fn test_render_unresolved_marker() {
        let mut rec = record();
        rec.final_response = r#"Odd <cite id="zzz">claim</cite>"#.to_string();
        let trace = annotate(&rec);
        assert_eq!(render_answer_plain(&trace.answer), "Odd claim[?]");
        assert_eq!(trace.summary.dangling_citation_ids, vec!["zzz".to_string()]);
    }

    #[test]
    fn test_document_ids_are_not_dangling() {
        let mut rec = record();
        rec.final_response = r#"<cite id="c1-0">x</cite>"#.to_string();
        rec.full_traces.tool_calls = vec![ToolCallInput {
            tool_name: "google_search".to_string(),
            call_id: "c1".to_string(),
            documents: vec![DocumentInput {
                id: "0".to_string(),
                title: "Doc".to_string(),
                url: "https://doc".to_string(),
                snippet: "body".to_string(),
            }],
        }];
        let trace = annotate(&rec);
        assert!(trace.summary.dangling_citation_ids.is_empty());
        assert_eq!(trace.summary.document_count, 1);
        assert_eq!(trace.summary.resolved_source_count, 0);
    }

    #[test]
    fn test_summary_counts() {
        let trace = annotate(&record());
        assert_eq!(trace.summary.snippet_count, 2);
        assert_eq!(trace.summary.cited_id_count, 2);
        assert_eq!(trace.summary.resolved_source_count, 2);
        assert_eq!(trace.summary.observed_tool_calls, 0);
        assert_eq!(trace.summary.problem, "Why?");
    }
}
