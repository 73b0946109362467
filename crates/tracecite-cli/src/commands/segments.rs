//! Segments command implementation.

use crate::cli::SegmentsArgs;
use crate::commands::load_and_annotate;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use tracecite_domain::{SegmentKind, TraceSegment};

/// Execute the segments command.
pub fn execute_segments(args: SegmentsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let trace = load_and_annotate(&args.input, &config.loader)?;
    let segments = filter_segments(trace.segments, args.kind.map(Into::into));
    println!("{}", formatter.format_segments(&segments)?);
    Ok(())
}

fn filter_segments(segments: Vec<TraceSegment>, kind: Option<SegmentKind>) -> Vec<TraceSegment> {
    match kind {
        Some(kind) => segments.into_iter().filter(|s| s.kind() == kind).collect(),
        None => segments,
    }
}
