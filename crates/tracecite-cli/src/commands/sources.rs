//! Sources command implementation.

use crate::cli::RecordArgs;
use crate::commands::load_and_annotate;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the sources command.
pub fn execute_sources(args: RecordArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let trace = load_and_annotate(&args.input, &config.loader)?;
    println!("{}", formatter.format_sources(&trace.sources)?);
    Ok(())
}
