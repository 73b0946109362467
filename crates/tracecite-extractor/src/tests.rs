//! End-to-end tests for the annotation pipeline

#[cfg(test)]
mod tests {
    use crate::{
        annotate, collect_cited_ids, correlate_documents, inline_citations, resolve_sources,
        segment_transcript, ExampleRecord, FullTraces, LoaderConfig,
    };
    use std::collections::HashMap;
    use tracecite_domain::{AnswerSpan, RawDocument, SourceRecord, ToolCallRecord, TraceSegment};

    fn snippets(pairs: &[(&str, &str)]) -> HashMap<String, SourceRecord> {
        pairs
            .iter()
            .map(|(id, title)| {
                (
                    id.to_string(),
                    SourceRecord::new(*id, *title, format!("https://{}", id)),
                )
            })
            .collect()
    }

    fn citation_numbers(span: &AnswerSpan) -> Vec<usize> {
        match span {
            AnswerSpan::Citation(reference) => reference.numbers().iter().map(|n| n.get()).collect(),
            AnswerSpan::Text(_) => panic!("Expected citation span"),
        }
    }

    #[test]
    fn test_shared_citation_numbers() {
        let answer = r#"See <cite id="a,b">this</cite> and <cite id="a">also</cite>."#;
        let table = snippets(&[("a", "Source A"), ("b", "Source B")]);

        let cited = collect_cited_ids(answer);
        let sources = resolve_sources(&cited, &table);
        let titles: Vec<(&str, usize)> = sources
            .iter()
            .map(|s| (s.source.title.as_str(), s.number.get()))
            .collect();
        assert_eq!(titles, vec![("Source A", 1), ("Source B", 2)]);

        let spans = inline_citations(answer, &sources);
        assert_eq!(spans.len(), 5);
        assert_eq!(citation_numbers(&spans[1]), vec![1, 2]);
        assert_eq!(citation_numbers(&spans[3]), vec![1]);
    }

    #[test]
    fn test_segmenter_example() {
        let text = r#"reasoning <call_tool name="search" query="x">q</call_tool><tool_output>r</tool_output> more"#;
        let segments = segment_transcript(text);
        let summary: Vec<(String, &str)> = segments.iter().map(|s| (s.label(), s.content())).collect();
        assert_eq!(
            summary,
            vec![
                ("text".to_string(), "reasoning"),
                ("tool_call(search)".to_string(), "q"),
                ("tool_output".to_string(), "r"),
                ("text".to_string(), "more"),
            ]
        );
        assert_eq!(segments[1].param("query"), Some("x"));
    }

    #[test]
    fn test_document_correlator_example() {
        let calls = vec![ToolCallRecord {
            tool_name: "google_search".to_string(),
            call_id: "c1".to_string(),
            documents: vec![
                RawDocument {
                    title: "First".to_string(),
                    ..RawDocument::default()
                },
                RawDocument {
                    title: "Second".to_string(),
                    ..RawDocument::default()
                },
            ],
        }];
        let cited = collect_cited_ids(r#"Fact <cite id="c1-1">here</cite>."#);
        let documents = correlate_documents(&cited, &calls);
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].id, "c1-1");
        assert_eq!(documents[0].title, "Second");
    }

    #[test]
    fn test_record_with_no_markup() {
        let record = ExampleRecord {
            problem: "p".to_string(),
            final_response: "Just an answer.".to_string(),
            full_traces: FullTraces {
                generated_text: "Just thinking.".to_string(),
                ..FullTraces::default()
            },
        };
        let trace = annotate(&record);
        assert!(trace.sources.is_empty());
        assert!(trace.documents.is_empty());
        assert_eq!(trace.segments.len(), 1);
        assert_eq!(trace.answer, vec![AnswerSpan::Text("Just an answer.".to_string())]);
    }

    #[test]
    fn test_reannotating_replaces_everything() {
        let json_a = r#"{"final_response": "<cite id=\"s\">a</cite>",
            "full_traces": {"generated_text": "<snippet id=s>\nTitle: A\nURL: u\nSnippet: x\n</snippet>"}}"#;
        let json_b = r#"{"final_response": "no citations", "full_traces": {"generated_text": "t"}}"#;

        let first = annotate(&ExampleRecord::from_json(json_a, &LoaderConfig::default()).unwrap());
        let second = annotate(&ExampleRecord::from_json(json_b, &LoaderConfig::default()).unwrap());
        assert_eq!(first.sources.len(), 1);
        assert!(second.sources.is_empty());
        assert_eq!(second.segments.len(), 1);

        let again = annotate(&ExampleRecord::from_json(json_a, &LoaderConfig::default()).unwrap());
        assert_eq!(first, again);
    }

    #[test]
    fn test_text_segments_match_source_spans() {
        let text = "  intro \n<tool_output>o</tool_output>\n middle \n<call_tool name=\"s\">c</call_tool> end ";
        for segment in segment_transcript(text) {
            if let TraceSegment::Text { content, span } = &segment {
                assert_eq!(&text[span.clone()], content);
            }
        }
    }
}

#[cfg(test)]
mod proptests {
    use crate::{collect_cited_ids, inline_citations, resolve_sources, segment_transcript};
    use proptest::prelude::*;
    use std::collections::HashMap;
    use tracecite_domain::{AnswerSpan, SegmentKind, SourceRecord};

    /// A transcript piece: free text, a tool call or a tool output
    fn piece() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z \n]{0,12}",
            ("[a-z_]{1,8}", "[a-z ]{0,8}", "[a-z \n]{0,10}").prop_map(|(name, query, body)| {
                format!(r#"<call_tool name="{}" query="{}">{}</call_tool>"#, name, query, body)
            }),
            "[a-z \n]{0,10}".prop_map(|body| format!("<tool_output>{}</tool_output>", body)),
        ]
    }

    fn marker() -> impl Strategy<Value = String> {
        (prop::collection::vec("[a-f]", 1..4), "[a-z ]{1,6}")
            .prop_map(|(ids, text)| format!(r#"<cite id="{}">{}</cite>"#, ids.join(","), text))
    }

    fn answer() -> impl Strategy<Value = String> {
        prop::collection::vec(prop_oneof!["[a-z .]{0,8}", marker()], 0..8)
            .prop_map(|parts| parts.concat())
    }

    fn table(known: &[String]) -> HashMap<String, SourceRecord> {
        known
            .iter()
            .map(|id| (id.clone(), SourceRecord::new(id.clone(), id.to_uppercase(), "u")))
            .collect()
    }

    proptest! {
        /// Property: segments cover the transcript in order; only whitespace is lost
        #[test]
        fn test_segments_reconstruct_transcript(pieces in prop::collection::vec(piece(), 0..10)) {
            let transcript = pieces.concat();
            let segments = segment_transcript(&transcript);

            let mut cursor = 0usize;
            for segment in &segments {
                let span = segment.span();
                prop_assert!(span.start >= cursor);
                prop_assert!(transcript[cursor..span.start].trim().is_empty());
                if segment.kind() == SegmentKind::Text {
                    prop_assert!(!segment.content().is_empty());
                }
                cursor = span.end;
            }
            prop_assert!(transcript[cursor..].trim().is_empty());
        }

        /// Property: citation numbers are exactly 1..=K and stable across runs
        #[test]
        fn test_numbering_is_bijection(text in answer(), known in prop::collection::vec("[a-f]", 0..6)) {
            let snippets = table(&known);
            let cited = collect_cited_ids(&text);
            let sources = resolve_sources(&cited, &snippets);

            let expected = cited.iter().filter(|id| snippets.contains_key(*id)).count();
            let numbers: Vec<usize> = sources.iter().map(|s| s.number.get()).collect();
            prop_assert_eq!(numbers, (1..=expected).collect::<Vec<_>>());

            let again = resolve_sources(&collect_cited_ids(&text), &snippets);
            prop_assert_eq!(sources, again);
        }

        /// Property: every marker shares numbers with the resolver and keeps its text
        #[test]
        fn test_inlined_answer_preserves_visible_text(text in answer(), known in prop::collection::vec("[a-f]", 0..6)) {
            let snippets = table(&known);
            let sources = resolve_sources(&collect_cited_ids(&text), &snippets);
            let spans = inline_citations(&text, &sources);

            for span in &spans {
                if let AnswerSpan::Citation(reference) = span {
                    for cited in &reference.sources {
                        prop_assert!(reference.ids.iter().any(|id| id == cited.id()));
                        prop_assert_eq!(&sources[cited.number.index()], cited);
                    }
                    let any_known = reference.ids.iter().any(|id| snippets.contains_key(id));
                    prop_assert_eq!(reference.is_unresolved(), !any_known);
                }
            }

            let visible: String = spans.iter().map(|s| s.display_text()).collect();
            let stripped = crate::markup::cite_re().replace_all(&text, "$2");
            prop_assert_eq!(visible, stripped.into_owned());
        }
    }
}
