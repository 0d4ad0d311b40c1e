use crate::{domain::Board, error::Result};
use async_trait::async_trait;

pub mod file_storage;

/// Storage trait for persisting the board document
#[async_trait]
pub trait Storage: Send + Sync {
    /// Loads the whole board document
    async fn load_board(&self) -> Result<Board>;

    /// Writes the whole board document
    async fn save_board(&self, board: &Board) -> Result<()>;

    /// Checks if a document has been persisted before
    async fn is_initialized(&self) -> bool;
}
