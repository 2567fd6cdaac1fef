//! Server startup and runtime errors.

use thiserror::Error;

/// Errors that stop the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound (e.g. the port is already in use).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server loop failed while accepting or serving connections.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
