//! Source records and citation numbering

use std::fmt;

/// A titled, URL-bearing excerpt found in the trace as a `<snippet>` block
///
/// Identifiers are unique within one transcript. Records are immutable once
/// created by the snippet extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    /// Snippet identifier (the bare `id=` token)
    pub id: String,

    /// Title line of the snippet
    pub title: String,

    /// URL line of the snippet
    pub url: String,

    /// Snippet body, if any text remained after trimming
    pub excerpt: Option<String>,
}

impl SourceRecord {
    /// Create a new source record without an excerpt
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            excerpt: None,
        }
    }

    /// Attach an excerpt to the record
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }
}

/// 1-based number a cited source is displayed with
///
/// Numbers are assigned in first-seen order of the answer text, so the set of
/// numbers for one answer is always exactly `1..=K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CitationNumber(usize);

impl CitationNumber {
    /// Number for the source at `index` (0-based) of the resolved sequence
    ///
    /// # Examples
    ///
    /// ```
    /// use tracecite_domain::CitationNumber;
    ///
    /// assert_eq!(CitationNumber::from_index(0).get(), 1);
    /// ```
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Build a number from its displayed value; `0` is not a valid number
    pub fn new(value: usize) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// The displayed value (always >= 1)
    pub fn get(&self) -> usize {
        self.0
    }

    /// Position of the numbered source in the resolved sequence
    pub fn index(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for CitationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A source paired with its citation number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitedSource {
    /// Display number
    pub number: CitationNumber,

    /// The cited snippet
    pub source: SourceRecord,
}

impl CitedSource {
    /// Identifier of the underlying source
    pub fn id(&self) -> &str {
        &self.source.id
    }
}
