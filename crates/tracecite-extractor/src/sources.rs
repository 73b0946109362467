//! Source resolution: cited identifiers to numbered sources

use crate::citations::CitedIds;
use std::collections::HashMap;
use tracecite_domain::{CitationNumber, CitedSource, SourceRecord};
use tracing::debug;

/// Resolve cited identifiers against the snippet table
///
/// Output follows the first-seen order of `cited`; a source's position plus
/// one is its citation number. Identifiers with no snippet are dropped.
pub fn resolve_sources(
    cited: &CitedIds,
    snippets: &HashMap<String, SourceRecord>,
) -> Vec<CitedSource> {
    let mut resolved = Vec::with_capacity(cited.len());

    for id in cited {
        match snippets.get(id) {
            Some(source) => resolved.push(CitedSource {
                number: CitationNumber::from_index(resolved.len()),
                source: source.clone(),
            }),
            None => debug!(id = %id, "Cited id has no snippet"),
        }
    }

    resolved
}
