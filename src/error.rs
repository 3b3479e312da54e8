use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    #[error("invalid HOST value: {0:?}")]
    InvalidHost(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error)
}
