//! File-based ScoreStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{RepositoryError, Result};
use super::traits::ScoreStore;

const FILE_NAME: &str = "high_score.json";

#[derive(Serialize, Deserialize)]
struct ScoreRecord {
    high_score: u64,
}

/// File-based implementation of ScoreStore.
///
/// Stores the best score as `{"high_score": n}` in `high_score.json`.
/// Writes go to a temp file first and are moved into place with a rename, so a
/// crash mid-write never leaves a truncated record behind.
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// Create a store under `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<Option<u64>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        let record: ScoreRecord = serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::CorruptedData(e.to_string()))?;

        tracing::debug!(
            target: "runtime::persistence",
            best = record.high_score,
            "Loaded best score from {}",
            self.path.display()
        );

        Ok(Some(record.high_score))
    }

    fn save(&self, best: u64) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec(&ScoreRecord { high_score: best })?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            target: "runtime::persistence",
            best,
            "Saved best score to {}",
            self.path.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileScoreStore::new(dir.path()).unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn best_survives_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        FileScoreStore::new(dir.path()).unwrap().save(12).unwrap();

        let reopened = FileScoreStore::new(dir.path()).unwrap();
        assert_eq!(reopened.load().unwrap(), Some(12));

        let raw = fs::read_to_string(reopened.path()).unwrap();
        assert_eq!(raw, r#"{"high_score":12}"#);
        assert!(!reopened.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn garbage_file_is_reported_as_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileScoreStore::new(dir.path().join("nested")).unwrap();
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(
            store.load(),
            Err(RepositoryError::CorruptedData(_))
        ));
    }
}
