//! Tracecite CLI - inspect citations and tool use in research-agent transcripts.

use clap::Parser;
use tracecite_cli::commands;
use tracecite_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> tracecite_cli::Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = commands::load_config_for(&cli.command, &config_path)?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled, config.settings.excerpt_width);

    match cli.command {
        Command::Show(args) => commands::execute_show(args, &config, &formatter)?,
        Command::Sources(args) => commands::execute_sources(args, &config, &formatter)?,
        Command::Documents(args) => commands::execute_documents(args, &config, &formatter)?,
        Command::Segments(args) => commands::execute_segments(args, &config, &formatter)?,
        Command::Answer(args) => commands::execute_answer(args, &config, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, &config_path, &formatter)?,
    }

    Ok(())
}
