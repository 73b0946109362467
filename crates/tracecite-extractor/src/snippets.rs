//! Snippet extraction: `<snippet id=...>` blocks to source records

use crate::markup::snippet_re;
use std::collections::HashMap;
use tracecite_domain::SourceRecord;
use tracing::debug;

/// Build the snippet lookup table for a transcript
///
/// Blocks that do not match the snippet grammar are skipped. When an id
/// appears more than once, the last block wins.
pub fn extract_snippets(transcript: &str) -> HashMap<String, SourceRecord> {
    let mut snippets = HashMap::new();
    let mut matched = 0usize;

    for caps in snippet_re().captures_iter(transcript) {
        matched += 1;
        let id = caps[1].trim().to_string();
        let excerpt = caps[4].trim();

        let mut record = SourceRecord::new(id.clone(), caps[2].trim(), caps[3].trim());
        if !excerpt.is_empty() {
            record = record.with_excerpt(excerpt);
        }
        snippets.insert(id, record);
    }

    let opened = opened_blocks(transcript);
    if opened > matched {
        debug!(skipped = opened - matched, "Skipped malformed snippet blocks");
    }

    snippets
}

/// Count opening `<snippet id=` tags, well-formed or not
fn opened_blocks(transcript: &str) -> usize {
    transcript.matches("<snippet id=").count()
}
