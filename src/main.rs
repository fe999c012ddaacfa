//! Brainbot CLI
//!
//! Answers questions from the brain file and learns the ones it can't.

use brainbot::{BrainConfig, Session, StdConsole, DEFAULT_BRAIN_FILE};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Brainbot - ask it something, teach it what it doesn't know
#[derive(Parser, Debug)]
#[command(name = "brainbot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the brain file
    #[arg(long, default_value = DEFAULT_BRAIN_FILE)]
    brain: PathBuf,

    /// Verbose output: debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = BrainConfig::new()
        .with_brain_file(cli.brain)
        .with_verbose(cli.verbose);
    init_logging(config.verbose);
    info!("Brain file: {:?}", config.brain_file);

    let mut session = Session::open(&config)?;
    let mut console = StdConsole::new();
    session.run(&mut console)?;

    Ok(())
}

/// Logs go to stderr so they never interleave with the conversation
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["brainbot"]);
        assert_eq!(cli.brain, PathBuf::from("the_brain.json"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["brainbot", "--brain", "/tmp/other.json", "-v"]);
        assert_eq!(cli.brain, PathBuf::from("/tmp/other.json"));
        assert!(cli.verbose);
    }
}
