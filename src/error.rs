use crate::http::parser::ParseError;

/// Errors that can terminate a single connection, plus the one fatal
/// startup case. Everything except `Bind` stays local to the connection
/// task that produced it.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The client sent bytes that do not form a valid HTTP request.
    /// The connection is dropped without a response.
    #[error("malformed request: {0}")]
    Parse(#[from] ParseError),

    /// Read, write or shutdown failure on the client socket.
    #[error("connection i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The per-connection deadline fired before the response was written.
    #[error("connection deadline elapsed")]
    Timeout,

    /// Could not bind the listen address. Fatal at startup.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
}
