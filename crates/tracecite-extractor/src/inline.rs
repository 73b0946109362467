//! Citation inlining: the answer as text and citation-reference spans

use crate::citations::scan_markers;
use tracecite_domain::{AnswerSpan, CitationReference, CitedSource};

/// Rewrite `answer` into ordered text and citation spans
///
/// Each marker carries the resolved sources it lists, in citation-number
/// order. A marker whose ids all fail to resolve still yields a span with no
/// sources, so no visible text is ever dropped.
pub fn inline_citations(answer: &str, sources: &[CitedSource]) -> Vec<AnswerSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0usize;

    for marker in scan_markers(answer) {
        if marker.range.start > cursor {
            spans.push(AnswerSpan::Text(answer[cursor..marker.range.start].to_string()));
        }
        cursor = marker.range.end;

        let cited: Vec<CitedSource> = sources
            .iter()
            .filter(|s| marker.ids.iter().any(|id| id == s.id()))
            .cloned()
            .collect();

        spans.push(AnswerSpan::Citation(CitationReference {
            text: marker.text,
            ids: marker.ids,
            sources: cited,
        }));
    }

    if cursor < answer.len() {
        spans.push(AnswerSpan::Text(answer[cursor..].to_string()));
    }

    spans
}
