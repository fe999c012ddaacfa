//! JSON storage for the brain.
//!
//! The file is read once at startup and fully rewritten after every teach.
//! Writes go straight to the target path, so a crash mid-write can leave a
//! truncated file behind.

use super::Brain;
use crate::{BrainError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Read a brain from `path`.
///
/// A missing file is an error; no empty brain is created in its place.
pub fn load_brain(path: &Path) -> Result<Brain> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => BrainError::NotFound {
            path: path.to_path_buf(),
        },
        _ => BrainError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let brain: Brain = serde_json::from_slice(&bytes).map_err(|source| BrainError::Format {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded {} questions from {:?}", brain.len(), path);
    Ok(brain)
}

/// Write `brain` to `path` as pretty JSON, replacing the previous content.
pub fn save_brain(path: &Path, brain: &Brain) -> Result<()> {
    let content = serde_json::to_string_pretty(brain).map_err(|source| BrainError::Format {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, content).map_err(|source| BrainError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Saved {} questions to {:?}", brain.len(), path);
    Ok(())
}

/// Handle on the brain file location.
///
/// No file handle is kept open between calls.
#[derive(Debug, Clone)]
pub struct BrainStore {
    path: PathBuf,
}

impl BrainStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Brain> {
        load_brain(&self.path)
    }

    pub fn save(&self, brain: &Brain) -> Result<()> {
        save_brain(&self.path, brain)
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::QaPair;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = BrainStore::new(temp_dir.path().join("missing.json"));

        match store.load() {
            Err(BrainError::NotFound { path }) => assert!(path.ends_with("missing.json")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("brain.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_brain(&path), Err(BrainError::Format { .. })));
    }

    #[test]
    fn test_load_wrong_shape() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("brain.json");

        for content in [
            r#"{}"#,
            r#"{"questions": {}}"#,
            r#"{"questions": [{"question": "q"}]}"#,
            r#"[]"#,
        ] {
            std::fs::write(&path, content).unwrap();
            assert!(
                matches!(load_brain(&path), Err(BrainError::Format { .. })),
                "Should reject: {}",
                content
            );
        }
    }

    #[test]
    fn test_save_is_pretty_with_two_spaces() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("brain.json");
        let brain = Brain::new(vec![QaPair::new("hello", "hi there")]);

        save_brain(&path, &brain).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let expected = "{\n  \"questions\": [\n    {\n      \"question\": \"hello\",\n      \"answer\": \"hi there\"\n    }\n  ]\n}";
        assert_eq!(content, expected);
    }

    #[test]
    fn test_save_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let store = BrainStore::new(temp_dir.path().join("brain.json"));
        std::fs::write(store.path(), "x".repeat(4096)).unwrap();

        store.save(&Brain::default()).unwrap();

        assert_eq!(store.load().unwrap(), Brain::default());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = BrainStore::new(temp_dir.path().join("no").join("such").join("brain.json"));

        assert!(matches!(store.save(&Brain::default()), Err(BrainError::Io { .. })));
    }
}
