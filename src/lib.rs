//! Brainbot - a question/answer agent backed by a JSON "brain"
//!
//! The agent answers a question with the stored answer of the closest known
//! question, or asks the user to teach it and persists the new pair:
//! - `brain`: question/answer data, lookup and the JSON store
//! - `matcher`: fuzzy similarity search over known questions
//! - `session`: the read / match / answer-or-teach loop
//! - `console`: line-based input and output used by the session

pub mod brain;
pub mod console;
pub mod matcher;
pub mod session;

pub use brain::{get_answer_for_question, Brain, BrainStore, QaPair};
pub use console::{LineIo, ScriptedIo, StdConsole};
pub use matcher::{find_best_match, similarity_ratio};
pub use session::{Session, SessionState};

use std::path::PathBuf;

/// Default location of the brain file, relative to the working directory
pub const DEFAULT_BRAIN_FILE: &str = "the_brain.json";

/// Configuration for Brainbot
#[derive(Debug, Clone)]
pub struct BrainConfig {
    /// Path to the brain file
    pub brain_file: PathBuf,

    /// Whether to emit debug logs
    pub verbose: bool,
}

impl BrainConfig {
    pub fn new() -> Self {
        Self {
            brain_file: PathBuf::from(DEFAULT_BRAIN_FILE),
            verbose: false,
        }
    }

    pub fn with_brain_file(mut self, path: PathBuf) -> Self {
        self.brain_file = path;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result type for Brainbot operations
pub type Result<T> = std::result::Result<T, BrainError>;

/// Errors that can occur in Brainbot
#[derive(Debug, thiserror::Error)]
pub enum BrainError {
    #[error("Brain file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Malformed brain file {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),
}
