//! Errors raised while starting or running the web server.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load leptos configuration: {0}")]
    Configuration(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped unexpectedly: {0}")]
    Serve(#[from] std::io::Error),
}
