//! Integration tests over a recorded example

use std::io::Write;
use std::path::PathBuf;
use tracecite_domain::{AnswerSpan, SegmentKind};
use tracecite_extractor::{annotate, render_answer_plain, ExampleRecord, ExtractorError, LoaderConfig};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/rust_release.json")
}

fn load_fixture() -> ExampleRecord {
    ExampleRecord::load(fixture_path(), &LoaderConfig::default()).expect("fixture loads")
}

#[test]
fn test_sources_numbered_in_first_seen_order() {
    let trace = annotate(&load_fixture());

    let sources: Vec<(usize, &str)> = trace
        .sources
        .iter()
        .map(|s| (s.number.get(), s.id()))
        .collect();
    assert_eq!(sources, vec![(1, "S_r1a"), (2, "S_r1b"), (3, "S_ed1")]);
    assert_eq!(
        trace.sources[0].source.url,
        "https://blog.rust-lang.org/2015/05/15/Rust-1.0.html"
    );
}

#[test]
fn test_only_cited_documents_listed() {
    let trace = annotate(&load_fixture());

    assert_eq!(trace.documents.len(), 1);
    let doc = &trace.documents[0];
    assert_eq!(doc.id, "c2-1");
    assert_eq!(doc.title, "Transitioning to a new edition");
    assert_eq!(doc.tool_name, "snippet_search");
    assert_eq!(doc.call_id, "c2");
}

#[test]
fn test_transcript_segments() {
    let trace = annotate(&load_fixture());

    let kinds: Vec<SegmentKind> = trace.segments.iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SegmentKind::Text,
            SegmentKind::ToolCall,
            SegmentKind::ToolOutput,
            SegmentKind::Text,
            SegmentKind::ToolCall,
            SegmentKind::ToolOutput,
            SegmentKind::Text,
        ]
    );
    assert_eq!(trace.segments[1].tool_name(), Some("google_search"));
    assert_eq!(trace.segments[1].param("num"), Some("5"));
    assert_eq!(trace.segments[4].param("limit"), Some("3"));
    assert_eq!(trace.segments[6].content(), "I have enough to answer.");
}

#[test]
fn test_answer_rendering() {
    let trace = annotate(&load_fixture());

    assert_eq!(
        render_answer_plain(&trace.answer),
        "Rust 1.0 shipped in May 2015 with a stability promise[1] that is still honored[1][2]. \
         Editions allow opt-in breaking changes[3], and the release notes describe more[?]."
    );

    let unresolved = trace
        .answer
        .iter()
        .filter(|s| matches!(s, AnswerSpan::Citation(r) if r.is_unresolved()))
        .count();
    assert_eq!(unresolved, 1);
}

#[test]
fn test_summary_reports_divergence() {
    let summary = annotate(&load_fixture()).summary;

    assert_eq!(summary.total_tokens, 5821);
    assert_eq!(summary.tool_call_count, 2);
    assert_eq!(summary.observed_tool_calls, 2);
    assert_eq!(summary.snippet_count, 3);
    assert_eq!(summary.cited_id_count, 5);
    assert_eq!(summary.resolved_source_count, 3);
    assert_eq!(summary.document_count, 1);
    assert_eq!(summary.dangling_citation_ids, vec!["S_broken".to_string()]);
}

#[test]
fn test_missing_file_is_load_failure() {
    let result = ExampleRecord::load("does/not/exist.json", &LoaderConfig::default());
    assert!(matches!(result, Err(ExtractorError::Io(_))));
}

#[test]
fn test_truncated_file_is_load_failure() {
    let contents = std::fs::read_to_string(fixture_path()).unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents[..contents.len() / 2].as_bytes()).unwrap();

    let result = ExampleRecord::load(file.path(), &LoaderConfig::default());
    assert!(matches!(result, Err(ExtractorError::JsonParse(_))));
}
