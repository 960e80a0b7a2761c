//! voxseg - Speech segment export CLI tool.
//!
//! Runs an external voice-activity / gender-detection engine against a
//! single audio file and writes the resulting labeled time segments as
//! `label,start,end` rows.

#![warn(missing_docs)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod output;
pub mod pipeline;

use clap::Parser;
use cli::Cli;
use config::load_default_config;
use engine::CommandEngine;
use tracing::info;

pub use error::{Error, Result};

/// Main entry point for the voxseg CLI.
pub fn run() -> Result<()> {
    let cli = parse_cli()?;

    init_logging();

    let config = load_default_config()?;
    let engine = CommandEngine::from_config(&config.engine);

    let result = pipeline::export_segments(&cli.input, &cli.output, &engine, &config.audio)?;
    info!("Done: {} segment(s) exported", result.segments);

    Ok(())
}

/// Parse the command line, mapping clap failures to [`Error::Usage`].
///
/// `--help` and `--version` print their text and exit the process with
/// status 0, matching standard CLI behavior.
fn parse_cli() -> Result<Cli> {
    match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(e)
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            // Print failures here are not actionable
            let _ = e.print();
            std::process::exit(0);
        }
        Err(e) => Err(Error::Usage {
            message: e.render().to_string().trim_end().to_string(),
        }),
    }
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
