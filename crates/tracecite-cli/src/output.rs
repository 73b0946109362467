//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use tracecite_domain::{AnswerSpan, CitedSource, DocumentRecord, TraceSegment};
use tracecite_extractor::TraceSummary;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    excerpt_width: usize,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, excerpt_width: usize) -> Self {
        Self {
            format,
            color_enabled,
            excerpt_width,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the numbered sources.
    pub fn format_sources(&self, sources: &[CitedSource]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&sources_json(sources))?),
            OutputFormat::Table => Ok(self.format_sources_table(sources)),
            OutputFormat::Quiet => Ok(sources
                .iter()
                .map(|s| s.id())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the cited documents.
    pub fn format_documents(&self, documents: &[DocumentRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&documents_json(documents))?),
            OutputFormat::Table => Ok(self.format_documents_table(documents)),
            OutputFormat::Quiet => Ok(documents
                .iter()
                .map(|d| d.id.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format transcript segments.
    pub fn format_segments(&self, segments: &[TraceSegment]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&segments_json(segments))?),
            OutputFormat::Table => Ok(self.format_segments_table(segments)),
            OutputFormat::Quiet => Ok(segments
                .iter()
                .map(|s| s.label())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the answer with inline markers and its reference list.
    pub fn format_answer(&self, spans: &[AnswerSpan], sources: &[CitedSource]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&answer_json(spans))?),
            OutputFormat::Quiet => Ok(tracecite_extractor::render_answer_plain(spans)),
            OutputFormat::Table => {
                let mut out = self.render_answer(spans);
                if !sources.is_empty() {
                    out.push_str("\n\n");
                    out.push_str(&self.colorize("References", "cyan"));
                    for cited in sources {
                        out.push_str(&format!(
                            "\n  [{}] {} - {}",
                            cited.number, cited.source.title, cited.source.url
                        ));
                    }
                }
                Ok(out)
            }
        }
    }

    /// Format the record summary.
    pub fn format_summary(&self, summary: &TraceSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&summary_json(summary))?),
            OutputFormat::Quiet => Ok(format!(
                "{} {} {}",
                summary.resolved_source_count, summary.document_count, summary.observed_tool_calls
            )),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Problem", &summary.problem]);
                builder.push_record(["Total tokens", &summary.total_tokens.to_string()]);
                builder.push_record([
                    "Tool calls (declared / seen)",
                    &format!("{} / {}", summary.tool_call_count, summary.observed_tool_calls),
                ]);
                builder.push_record(["Snippets", &summary.snippet_count.to_string()]);
                builder.push_record(["Cited ids", &summary.cited_id_count.to_string()]);
                builder.push_record(["Sources", &summary.resolved_source_count.to_string()]);
                builder.push_record(["Documents", &summary.document_count.to_string()]);
                if !summary.dangling_citation_ids.is_empty() {
                    builder.push_record(["Unknown ids", &summary.dangling_citation_ids.join(", ")]);
                }
                Ok(self.finish_table(builder))
            }
        }
    }

    /// Format everything `show` prints as one JSON document.
    pub fn format_trace_json(
        &self,
        summary: &TraceSummary,
        spans: &[AnswerSpan],
        sources: &[CitedSource],
        documents: &[DocumentRecord],
    ) -> Result<String> {
        let value = json!({
            "summary": summary_json(summary),
            "answer": answer_json(spans),
            "sources": sources_json(sources),
            "documents": documents_json(documents),
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_sources_table(&self, sources: &[CitedSource]) -> String {
        if sources.is_empty() {
            return self.colorize("No source information available.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "ID", "Title", "URL", "Excerpt"]);
        for cited in sources {
            let excerpt = cited.source.excerpt.as_deref().unwrap_or("");
            builder.push_record([
                cited.number.to_string().as_str(),
                &cited.source.id,
                &cited.source.title,
                &cited.source.url,
                &self.truncate(excerpt),
            ]);
        }
        self.finish_table(builder)
    }

    fn format_documents_table(&self, documents: &[DocumentRecord]) -> String {
        if documents.is_empty() {
            return self.colorize("No cited documents.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "ID", "Tool", "Title", "URL", "Excerpt"]);
        for (i, doc) in documents.iter().enumerate() {
            builder.push_record([
                (i + 1).to_string().as_str(),
                &doc.id,
                &doc.tool_name,
                &doc.title,
                &doc.url,
                &self.truncate(&doc.excerpt),
            ]);
        }
        self.finish_table(builder)
    }

    fn format_segments_table(&self, segments: &[TraceSegment]) -> String {
        if segments.is_empty() {
            return self.colorize("Transcript is empty.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Kind", "Params", "Content"]);
        for (i, segment) in segments.iter().enumerate() {
            let params = match segment {
                TraceSegment::ToolCall { params, .. } => params
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect::<Vec<_>>()
                    .join(" "),
                _ => String::new(),
            };
            builder.push_record([
                (i + 1).to_string().as_str(),
                &segment.label(),
                &params,
                &self.truncate(segment.content().trim()),
            ]);
        }
        self.finish_table(builder)
    }

    /// Render the answer with colored `[n]` markers.
    fn render_answer(&self, spans: &[AnswerSpan]) -> String {
        let mut out = String::new();
        for span in spans {
            match span {
                AnswerSpan::Text(text) => out.push_str(text),
                AnswerSpan::Citation(reference) => {
                    out.push_str(&reference.text);
                    let markers = if reference.is_unresolved() {
                        "[?]".to_string()
                    } else {
                        reference
                            .numbers()
                            .iter()
                            .map(|n| format!("[{}]", n))
                            .collect::<String>()
                    };
                    let color = if reference.is_unresolved() { "yellow" } else { "cyan" };
                    out.push_str(&self.colorize(&markers, color));
                }
            }
        }
        out
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Shorten text to the configured excerpt width, on a char boundary.
    fn truncate(&self, text: &str) -> String {
        let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if flat.chars().count() <= self.excerpt_width {
            return flat;
        }
        let cut: String = flat.chars().take(self.excerpt_width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a section heading.
    pub fn heading(&self, title: &str) -> String {
        self.colorize(title, "magenta")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn cited_source_json(cited: &CitedSource) -> Value {
    json!({
        "number": cited.number.get(),
        "id": cited.source.id,
        "title": cited.source.title,
        "url": cited.source.url,
        "excerpt": cited.source.excerpt,
    })
}

fn sources_json(sources: &[CitedSource]) -> Value {
    Value::Array(sources.iter().map(cited_source_json).collect())
}

fn documents_json(documents: &[DocumentRecord]) -> Value {
    Value::Array(
        documents
            .iter()
            .map(|d| {
                json!({
                    "id": d.id,
                    "title": d.title,
                    "url": d.url,
                    "excerpt": d.excerpt,
                    "call_id": d.call_id,
                    "tool_name": d.tool_name,
                })
            })
            .collect(),
    )
}

fn segments_json(segments: &[TraceSegment]) -> Value {
    Value::Array(
        segments
            .iter()
            .map(|s| {
                let span = s.span();
                let mut value = json!({
                    "kind": s.kind().as_str(),
                    "content": s.content(),
                    "start": span.start,
                    "end": span.end,
                });
                if let TraceSegment::ToolCall {
                    tool_name, params, ..
                } = s
                {
                    let params: serde_json::Map<String, Value> = params
                        .iter()
                        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                        .collect();
                    value["tool_name"] = json!(tool_name);
                    value["params"] = Value::Object(params);
                }
                value
            })
            .collect(),
    )
}

fn answer_json(spans: &[AnswerSpan]) -> Value {
    Value::Array(
        spans
            .iter()
            .map(|span| match span {
                AnswerSpan::Text(text) => json!({ "type": "text", "text": text }),
                AnswerSpan::Citation(reference) => json!({
                    "type": "citation",
                    "text": reference.text,
                    "ids": reference.ids,
                    "numbers": reference.numbers().iter().map(|n| n.get()).collect::<Vec<_>>(),
                    "sources": reference.sources.iter().map(cited_source_json).collect::<Vec<_>>(),
                }),
            })
            .collect(),
    )
}

fn summary_json(summary: &TraceSummary) -> Value {
    json!({
        "problem": summary.problem,
        "total_tokens": summary.total_tokens,
        "tool_call_count": summary.tool_call_count,
        "observed_tool_calls": summary.observed_tool_calls,
        "snippet_count": summary.snippet_count,
        "cited_id_count": summary.cited_id_count,
        "resolved_source_count": summary.resolved_source_count,
        "document_count": summary.document_count,
        "dangling_citation_ids": summary.dangling_citation_ids,
    })
}
