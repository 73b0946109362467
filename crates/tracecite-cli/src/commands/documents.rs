//! Documents command implementation.

use crate::cli::RecordArgs;
use crate::commands::load_and_annotate;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the documents command.
pub fn execute_documents(args: RecordArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let trace = load_and_annotate(&args.input, &config.loader)?;
    println!("{}", formatter.format_documents(&trace.documents)?);
    Ok(())
}
