//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use tracecite_domain::SegmentKind;

/// Tracecite - Inspect citations and tool use in research-agent transcripts.
#[derive(Debug, Parser)]
#[command(name = "tracecite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TRACECITE_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (identifiers only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show summary, answer, sources and documents of a record
    Show(RecordArgs),

    /// List the numbered sources cited by the answer
    Sources(RecordArgs),

    /// List the tool-call documents cited by the answer
    Documents(RecordArgs),

    /// Break the transcript into text, tool calls and tool outputs
    Segments(SegmentsArgs),

    /// Print the answer with citation markers and references
    Answer(RecordArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments shared by every record command.
#[derive(Debug, Parser)]
pub struct RecordArgs {
    /// Path to the example record (JSON), or `-` for stdin
    pub input: String,
}

/// Arguments for the segments command.
#[derive(Debug, Parser)]
pub struct SegmentsArgs {
    /// Path to the example record (JSON), or `-` for stdin
    pub input: String,

    /// Only show segments of this kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,
}

/// Segment kind argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    /// Reasoning text
    Text,
    /// Tool invocations
    ToolCall,
    /// Tool outputs
    ToolOutput,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<KindArg> for SegmentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Text => SegmentKind::Text,
            KindArg::ToolCall => SegmentKind::ToolCall,
            KindArg::ToolOutput => SegmentKind::ToolOutput,
        }
    }
}
