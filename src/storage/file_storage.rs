use crate::{
    domain::Board,
    error::{BoardError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation
///
/// Persists the whole board as one pretty-printed JSON document at a fixed
/// path.
pub struct FileStorage {
    data_file: PathBuf,
}

impl FileStorage {
    /// Creates a new FileStorage backed by the given file path
    pub fn new(data_file: impl AsRef<Path>) -> Self {
        Self {
            data_file: data_file.as_ref().to_path_buf(),
        }
    }

    async fn ensure_parent_exists(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load_board(&self) -> Result<Board> {
        let contents = fs::read_to_string(&self.data_file).await?;
        let board: Board = serde_json::from_str(&contents).map_err(|e| {
            BoardError::StorageUnavailable(format!(
                "cannot parse {}: {}",
                self.data_file.display(),
                e
            ))
        })?;

        Ok(board)
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        self.ensure_parent_exists(&self.data_file).await?;

        let json = serde_json::to_string_pretty(board)?;
        fs::write(&self.data_file, json).await?;

        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        self.data_file.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> FileStorage {
        FileStorage::new(dir.path().join("data.json"))
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let board = Board::seed();
        storage.save_board(&board).await.unwrap();

        let loaded = storage.load_board().await.unwrap();
        assert_eq!(loaded, board);
    }

    #[tokio::test]
    async fn test_is_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        assert!(!storage.is_initialized().await);

        storage.save_board(&Board::seed()).await.unwrap();

        assert!(storage.is_initialized().await);
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("nested").join("data.json"));

        storage.save_board(&Board::seed()).await.unwrap();

        assert!(storage.is_initialized().await);
    }

    #[tokio::test]
    async fn test_load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        tokio::fs::write(&path, "not a board {").await.unwrap();

        let storage = FileStorage::new(&path);
        let err = storage.load_board().await.unwrap_err();

        assert!(matches!(err, BoardError::StorageUnavailable(_)));
    }

    #[tokio::test]
    async fn test_document_is_pretty_printed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        let storage = FileStorage::new(&path);

        storage.save_board(&Board::seed()).await.unwrap();

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(contents.contains("\n  \"columns\""));
    }
}
