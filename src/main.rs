mod config;
mod error;
mod routes;

use std::net::SocketAddr;

use leptos::config::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let leptos_conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;

    let app = routes::app(leptos_conf.leptos_options, &config.static_dir);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, static_dir = %config.static_dir.display(), "portfolio listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)?;
    Ok(())
}
