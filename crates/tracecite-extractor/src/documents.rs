//! Document correlation: tool-call results the answer actually cites

use crate::citations::CitedIds;
use tracecite_domain::{synthesized_document_id, DocumentRecord, ToolCallRecord};

/// Keep only the documents whose positional `callId-index` id is cited
///
/// Output order is tool-call order, then document order within a call,
/// independent of citation order.
pub fn correlate_documents(cited: &CitedIds, tool_calls: &[ToolCallRecord]) -> Vec<DocumentRecord> {
    tool_calls
        .iter()
        .flat_map(|call| {
            call.documents
                .iter()
                .enumerate()
                .filter(move |(index, _)| {
                    cited.contains(&synthesized_document_id(&call.call_id, *index))
                })
                .map(move |(index, document)| DocumentRecord::from_raw(call, index, document))
        })
        .collect()
}
