use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Router;

/// Accepts connections and spawns one connection task per client. The loop
/// itself is sequential; routes must be fully registered before it starts.
/// Runs until the accept call fails or the future is dropped.
pub async fn run(cfg: &Config, router: Arc<Router>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    let read_timeout = cfg.read_timeout_ms.map(Duration::from_millis);

    loop {
        let (socket, peer) = listener.accept().await?;

        let router = router.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, router, read_timeout);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
