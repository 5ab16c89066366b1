//! Startup errors for the host binary.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// `[[workspace.metadata.leptos]]` / `LEPTOS_*` settings could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
