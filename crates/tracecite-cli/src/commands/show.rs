//! Show command implementation.

use crate::cli::RecordArgs;
use crate::commands::load_and_annotate;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;

/// Execute the show command.
pub fn execute_show(args: RecordArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let trace = load_and_annotate(&args.input, &config.loader)?;

    if formatter.format() == OutputFormat::Json {
        println!(
            "{}",
            formatter.format_trace_json(&trace.summary, &trace.answer, &trace.sources, &trace.documents)?
        );
        return Ok(());
    }

    println!("{}", formatter.heading("Summary"));
    println!("{}", formatter.format_summary(&trace.summary)?);
    println!();
    println!("{}", formatter.heading("Answer"));
    println!("{}", formatter.format_answer(&trace.answer, &trace.sources)?);
    println!();
    println!("{}", formatter.heading("Sources"));
    println!("{}", formatter.format_sources(&trace.sources)?);
    println!();
    println!("{}", formatter.heading("Documents"));
    println!("{}", formatter.format_documents(&trace.documents)?);

    if !trace.summary.dangling_citation_ids.is_empty() {
        println!();
        println!(
            "{}",
            formatter.info(&format!(
                "{} cited id(s) matched no snippet or document",
                trace.summary.dangling_citation_ids.len()
            ))
        );
    }

    Ok(())
}
