use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::ServerError;
use crate::http::connection::Connection;
use crate::state::ServerState;

/// Binds the configured address and serves forever. Bind failure is
/// fatal and propagates; everything after that stays inside the loop.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: cfg.listen_addr.clone(),
            source,
        })?;
    info!("Listening on {}", cfg.listen_addr);

    let state = Arc::new(ServerState::new());
    serve(listener, state, cfg.deadline).await
}

/// Accept loop over an already-bound listener. Split out from [`run`]
/// so tests can bind an ephemeral port themselves.
///
/// Accept failures are logged and skipped; connection errors stay in
/// their spawned task. The loop itself never returns.
pub async fn serve(
    listener: TcpListener,
    state: Arc<ServerState>,
    deadline: Duration,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let state = Arc::clone(&state);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, state, deadline);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
