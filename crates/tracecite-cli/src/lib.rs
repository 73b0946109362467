//! Tracecite CLI library.
//!
//! Loads research-agent example records, runs the annotation engine and
//! renders sources, documents, transcript segments and the cited answer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
