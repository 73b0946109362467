//! Command implementations.

pub mod answer;
pub mod config;
pub mod documents;
pub mod segments;
pub mod show;
pub mod sources;

pub use self::answer::execute_answer;
pub use self::config::{execute_config, load_config_for};
pub use self::documents::execute_documents;
pub use self::segments::execute_segments;
pub use self::show::execute_show;
pub use self::sources::execute_sources;

use crate::error::Result;
use std::io;
use tracecite_extractor::{annotate, AnnotatedTrace, ExampleRecord, LoaderConfig};
use tracing::debug;

/// Load the record named by `input` (`-` reads stdin) and annotate it.
///
/// A load failure returns an error before any derivation runs.
pub fn load_and_annotate(input: &str, loader: &LoaderConfig) -> Result<AnnotatedTrace> {
    let record = if input == "-" {
        debug!("Reading record from stdin");
        ExampleRecord::from_reader(io::stdin().lock(), loader)?
    } else {
        debug!(path = input, "Reading record from file");
        ExampleRecord::load(input, loader)?
    };
    Ok(annotate(&record))
}
