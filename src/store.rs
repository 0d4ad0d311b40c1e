use crate::{
    domain::{Board, Card, CardUpdate, NewCard},
    error::Result,
    storage::Storage,
};
use tokio::sync::Mutex;

/// Sole owner of durable board state
///
/// Every operation runs a full load-mutate-persist cycle against the
/// backing storage. The cycles are serialized by a single mutex, so two
/// concurrent mutations cannot overwrite each other's read. When an
/// operation fails, nothing is written: the document on disk either
/// reflects the whole change or the prior state.
pub struct BoardStore {
    storage: Box<dyn Storage>,
    lock: Mutex<()>,
}

impl BoardStore {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            lock: Mutex::new(()),
        }
    }

    /// Loads the current document, materializing and persisting the seed
    /// on first use
    pub async fn load(&self) -> Result<Board> {
        let _guard = self.lock.lock().await;
        self.load_or_seed().await
    }

    /// Creates a card in the target column and persists the document
    pub async fn create_card(&self, draft: NewCard) -> Result<Card> {
        self.mutate(|board| board.create_card(draft)).await
    }

    /// Moves a card to the end of the target column and persists the
    /// document
    pub async fn move_card(&self, card_id: u64, target_column_id: u64) -> Result<Card> {
        self.mutate(|board| board.move_card(card_id, target_column_id))
            .await
    }

    /// Overwrites a card's updatable fields and persists the document
    pub async fn update_card(&self, card_id: u64, update: CardUpdate) -> Result<Card> {
        self.mutate(|board| board.update_card(card_id, update)).await
    }

    /// Removes a card from its column and persists the document
    pub async fn delete_card(&self, card_id: u64) -> Result<()> {
        self.mutate(|board| board.remove_card(card_id)).await
    }

    async fn load_or_seed(&self) -> Result<Board> {
        if !self.storage.is_initialized().await {
            let board = Board::seed();
            self.storage.save_board(&board).await?;
            return Ok(board);
        }
        self.storage.load_board().await
    }

    async fn mutate<T>(&self, op: impl FnOnce(&mut Board) -> Result<T>) -> Result<T> {
        let _guard = self.lock.lock().await;
        let mut board = self.load_or_seed().await?;
        let outcome = op(&mut board)?;
        self.storage.save_board(&board).await?;
        Ok(outcome)
    }
}
