//! # API Server
//!
//! Binds the listener and runs the axum router on a background task.
//!
//! ```text
//! ApiServer::new(config, store)
//!      │
//!      ▼
//! start() ── bind ──► spawn axum::serve ──► ApiHandle
//!                                              │
//!                                              ├── local_addr()
//!                                              └── shutdown() ── graceful stop
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use receipt_store::PointsStore;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::ApiConfig;
use crate::error::ServerError;
use crate::routes::router;
use crate::AppState;

/// The HTTP server, before it is started.
pub struct ApiServer {
    config: ApiConfig,
    state: Arc<AppState>,
}

/// Handle for a running server.
pub struct ApiHandle {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<Result<(), std::io::Error>>,
}

impl ApiServer {
    /// Creates a server that records points in `store`.
    pub fn new(config: ApiConfig, store: Arc<dyn PointsStore>) -> Self {
        ApiServer {
            config,
            state: Arc::new(AppState::new(store)),
        }
    }

    /// Binds the listener and starts serving in the background.
    pub async fn start(self) -> Result<ApiHandle, ServerError> {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: bind_addr.clone(),
                source,
            })?;
        let addr = listener.local_addr()?;

        let app = router(self.state, self.config.max_body_bytes);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        info!(%addr, "Receipt API listening");

        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                    info!("Receipt API shutting down");
                })
                .await
        });

        Ok(ApiHandle {
            addr,
            shutdown_tx,
            task,
        })
    }
}

impl ApiHandle {
    /// Address the server actually bound (useful with port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stops accepting connections and waits for in-flight requests.
    pub async fn shutdown(self) -> Result<(), ServerError> {
        let _ = self.shutdown_tx.send(());
        self.task
            .await
            .map_err(|e| ServerError::Task(e.to_string()))??;
        Ok(())
    }
}
