/// Shared application state passed to axum handlers.
use crate::store::BoardStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BoardStore>,
}
