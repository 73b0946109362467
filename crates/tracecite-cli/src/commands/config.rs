//! Config command implementation.

use crate::cli::{Command, ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Load the configuration `command` runs with.
///
/// `config init` starts from defaults so it can overwrite a file that no
/// longer parses or validates.
pub fn load_config_for(command: &Command, path: &Path) -> Result<Config> {
    match command {
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. },
        }) => Ok(Config::default()),
        _ => Config::load_from(path),
    }
}

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, config: &Config, path: &Path, formatter: &Formatter) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", formatter.info(&format!("Config file: {}", path.display())));
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::InvalidInput(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save_to(path)?;
            println!("{}", formatter.success(&format!("Wrote {}", path.display())));
        }
    }
    Ok(())
}
