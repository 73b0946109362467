//! Transcript segmentation into text, tool calls and tool outputs
//!
//! Each markup kind keeps its own next match. The walk always emits the
//! earliest one; a kind whose pending match started inside the emitted block
//! is rescanned from the end of that block. Text between matches becomes
//! `Text` segments.

use crate::markup::{attribute_re, call_tool_re, tool_output_re};
use std::ops::Range;
use tracecite_domain::TraceSegment;
use tracing::debug;

/// Payload of a matched markup block
#[derive(Debug, Clone, PartialEq, Eq)]
enum Markup {
    ToolCall {
        tool_name: String,
        params: Vec<(String, String)>,
        body: String,
    },
    ToolOutput {
        body: String,
    },
}

/// A markup block and where it sits in the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
struct MarkupMatch {
    range: Range<usize>,
    markup: Markup,
}

impl MarkupMatch {
    fn into_segment(self) -> TraceSegment {
        match self.markup {
            Markup::ToolCall {
                tool_name,
                params,
                body,
            } => TraceSegment::ToolCall {
                content: body,
                tool_name,
                params,
                span: self.range,
            },
            Markup::ToolOutput { body } => TraceSegment::ToolOutput {
                content: body,
                span: self.range,
            },
        }
    }
}

fn tool_call_at(transcript: &str, start: usize) -> Option<MarkupMatch> {
    let caps = call_tool_re().captures_at(transcript, start)?;
    let whole = caps.get(0)?;
    Some(MarkupMatch {
        range: whole.range(),
        markup: Markup::ToolCall {
            tool_name: caps[1].to_string(),
            params: parse_params(&caps[2]),
            body: caps[3].to_string(),
        },
    })
}

fn tool_output_at(transcript: &str, start: usize) -> Option<MarkupMatch> {
    let caps = tool_output_re().captures_at(transcript, start)?;
    let whole = caps.get(0)?;
    Some(MarkupMatch {
        range: whole.range(),
        markup: Markup::ToolOutput {
            body: caps[1].to_string(),
        },
    })
}

/// Next unconsumed match of one markup kind
struct KindScan {
    scan: fn(&str, usize) -> Option<MarkupMatch>,
    next: Option<MarkupMatch>,
}

impl KindScan {
    fn new(scan: fn(&str, usize) -> Option<MarkupMatch>, transcript: &str) -> Self {
        Self {
            scan,
            next: scan(transcript, 0),
        }
    }

    fn start(&self) -> Option<usize> {
        self.next.as_ref().map(|m| m.range.start)
    }

    /// Drop a pending match that starts inside emitted markup and rescan from `cursor`
    fn skip_overlap(&mut self, transcript: &str, cursor: usize) {
        if let Some(pending) = self.next.as_ref().filter(|m| m.range.start < cursor) {
            debug!(
                start = pending.range.start,
                end = pending.range.end,
                "Skipped markup overlapping a previous block"
            );
            self.next = (self.scan)(transcript, cursor);
        }
    }

    /// Take the pending match and look for the next one after it
    fn advance(&mut self, transcript: &str) -> Option<MarkupMatch> {
        let current = self.next.take()?;
        self.next = (self.scan)(transcript, current.range.end);
        Some(current)
    }
}

/// Parse `key="value"` pairs, keeping first position and last value per key
fn parse_params(attributes: &str) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();

    for caps in attribute_re().captures_iter(attributes) {
        let key = &caps[1];
        let value = caps[2].to_string();
        if key == "name" {
            continue;
        }
        match params.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value,
            None => params.push((key.to_string(), value)),
        }
    }

    params
}

/// Push the trimmed text of `transcript[range]` unless it is blank
fn push_text(segments: &mut Vec<TraceSegment>, transcript: &str, range: Range<usize>) {
    let raw = &transcript[range.clone()];
    let content = raw.trim();
    if content.is_empty() {
        return;
    }

    let start = range.start + (raw.len() - raw.trim_start().len());
    segments.push(TraceSegment::Text {
        content: content.to_string(),
        span: start..start + content.len(),
    });
}

/// Split a transcript into ordered, typed segments
pub fn segment_transcript(transcript: &str) -> Vec<TraceSegment> {
    let mut scans = [
        KindScan::new(tool_call_at, transcript),
        KindScan::new(tool_output_at, transcript),
    ];
    let mut segments = Vec::new();
    let mut cursor = 0usize;

    loop {
        for scan in scans.iter_mut() {
            scan.skip_overlap(transcript, cursor);
        }
        let earliest = scans
            .iter_mut()
            .filter_map(|scan| scan.start().map(|start| (start, scan)))
            .min_by_key(|(start, _)| *start);
        let Some(m) = earliest.and_then(|(_, scan)| scan.advance(transcript)) else {
            break;
        };

        push_text(&mut segments, transcript, cursor..m.range.start);
        cursor = m.range.end;
        segments.push(m.into_segment());
    }
    push_text(&mut segments, transcript, cursor..transcript.len());

    segments
}
