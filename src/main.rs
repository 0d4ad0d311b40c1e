use cardwall::config::Config;
use cardwall::state::AppState;
use cardwall::storage::file_storage::FileStorage;
use cardwall::{server, BoardStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env();
    log::info!("Board data stored at {}", config.data_file.display());

    let storage = FileStorage::new(&config.data_file);
    let state = AppState {
        store: Arc::new(BoardStore::new(storage)),
    };

    server::run_server(&config, state).await
}
