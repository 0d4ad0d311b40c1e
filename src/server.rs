use crate::api::api_router;
use crate::config::Config;
use crate::state::AppState;
/// HTTP server: binds the API router and serves until shutdown.
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub async fn run_server(config: &Config, state: AppState) -> anyhow::Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app: Router = api_router().layer(cors).with_state(state);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.bind_address, config.port)).await?;
    let actual_port = listener.local_addr()?.port();

    log::info!(
        "HTTP server listening on http://{}:{}",
        config.bind_address,
        actual_port
    );

    axum::serve(listener, app).await?;
    Ok(())
}
