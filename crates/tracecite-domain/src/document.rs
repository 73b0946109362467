//! Tool calls and the documents they retrieved

/// A document as returned by a retrieval tool
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawDocument {
    /// Identifier reported by the tool (not used for citation matching)
    pub id: String,

    /// Document title
    pub title: String,

    /// Document URL
    pub url: String,

    /// Retrieved excerpt
    pub snippet: String,
}

/// One invocation of a retrieval tool (read-only input)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolCallRecord {
    /// Name of the tool that was called
    pub tool_name: String,

    /// Call identifier, the prefix of every synthesized document id
    pub call_id: String,

    /// Documents in the order the tool returned them
    pub documents: Vec<RawDocument>,
}

impl ToolCallRecord {
    /// Synthesized identifiers of every document of this call, in order
    pub fn document_ids(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.documents.len()).map(move |i| synthesized_document_id(&self.call_id, i))
    }
}

/// Positional identifier of the `index`-th (0-based) document of a call
///
/// The raw data never carries this identifier; answers cite documents by it.
///
/// # Examples
///
/// ```
/// use tracecite_domain::synthesized_document_id;
///
/// assert_eq!(synthesized_document_id("c1", 1), "c1-1");
/// ```
pub fn synthesized_document_id(call_id: &str, index: usize) -> String {
    format!("{}-{}", call_id, index)
}

/// A retrieved document that the final answer cites
///
/// Uncited documents never become a `DocumentRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Synthesized `callId-index` identifier
    pub id: String,

    /// Document title
    pub title: String,

    /// Document URL
    pub url: String,

    /// Retrieved excerpt
    pub excerpt: String,

    /// Identifier of the owning tool call
    pub call_id: String,

    /// Name of the owning tool
    pub tool_name: String,
}

impl DocumentRecord {
    /// Build a record for `document` at `index` within `call`
    pub fn from_raw(call: &ToolCallRecord, index: usize, document: &RawDocument) -> Self {
        Self {
            id: synthesized_document_id(&call.call_id, index),
            title: document.title.clone(),
            url: document.url.clone(),
            excerpt: document.snippet.clone(),
            call_id: call.call_id.clone(),
            tool_name: call.tool_name.clone(),
        }
    }
}
