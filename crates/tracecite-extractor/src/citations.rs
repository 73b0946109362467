//! Citation collection from the final answer

use crate::markup::cite_re;
use indexmap::IndexSet;
use std::ops::Range;

/// Distinct cited identifiers, iterated in first-seen order of the answer
///
/// Citation numbers are derived from this order, so the container must keep
/// insertion order.
pub type CitedIds = IndexSet<String>;

/// A `<cite>` marker found in the answer text
///
/// Only lives for the duration of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CitationMarker {
    /// Byte range of the whole marker in the answer
    pub range: Range<usize>,
    /// Identifiers from the `id` attribute, trimmed, in marker order
    pub ids: Vec<String>,
    /// The annotated text
    pub text: String,
}

/// Scan every citation marker in `answer`, left to right
pub(crate) fn scan_markers(answer: &str) -> impl Iterator<Item = CitationMarker> + '_ {
    cite_re().captures_iter(answer).filter_map(|caps| {
        let whole = caps.get(0)?;
        Some(CitationMarker {
            range: whole.range(),
            ids: split_ids(&caps[1]),
            text: caps[2].to_string(),
        })
    })
}

/// Split a comma-separated id attribute, dropping empty entries
pub(crate) fn split_ids(attribute: &str) -> Vec<String> {
    attribute
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collect the set of identifiers cited anywhere in the answer
pub fn collect_cited_ids(answer: &str) -> CitedIds {
    let mut cited = CitedIds::new();
    for marker in scan_markers(answer) {
        cited.extend(marker.ids);
    }
    cited
}
