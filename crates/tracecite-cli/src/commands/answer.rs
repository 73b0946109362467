//! Answer command implementation.

use crate::cli::RecordArgs;
use crate::commands::load_and_annotate;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the answer command.
pub fn execute_answer(args: RecordArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let trace = load_and_annotate(&args.input, &config.loader)?;
    println!("{}", formatter.format_answer(&trace.answer, &trace.sources)?);
    Ok(())
}
