//! Server lifecycle: start on a port, stop with graceful shutdown.
//!
//! # Design
//! Each `BirdServer` owns a fresh `BirdStore` through the router state, so
//! stopping the server (and dropping the serving task) tears the store down
//! with it. Shutdown is signalled over a oneshot channel and `stop` waits for
//! in-flight requests to finish.

use std::{net::SocketAddr, sync::Arc};

use tokio::{
    net::TcpListener,
    sync::{oneshot, RwLock},
    task::JoinHandle,
};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::routes::{router, Db};
use crate::store::BirdStore;

/// Router backed by a new, empty store.
pub fn app() -> axum::Router {
    let db: Db = Arc::new(RwLock::new(BirdStore::new()));
    router(db)
}

/// A running server bound to a local address.
#[derive(Debug)]
pub struct BirdServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<Result<(), std::io::Error>>,
}

impl BirdServer {
    /// Bind `127.0.0.1:port` and start serving. Port 0 picks a free port.
    pub async fn start(port: u16) -> Result<Self, ServerError> {
        Self::start_with(&ServerConfig {
            port,
            ..ServerConfig::default()
        })
        .await
    }

    pub async fn start_with(config: &ServerConfig) -> Result<Self, ServerError> {
        let bind_addr = config.bind_addr();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| ServerError::bind(&bind_addr, e))?;
        Self::serve(listener)
    }

    /// Start serving on an already bound listener.
    pub fn serve(listener: TcpListener) -> Result<Self, ServerError> {
        let addr = listener.local_addr()?;
        let (shutdown, signal) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            axum::serve(listener, app())
                .with_graceful_shutdown(async move {
                    // A dropped sender also means "stop".
                    let _ = signal.await;
                })
                .await
        });

        tracing::info!(%addr, "bird server listening");
        Ok(Self {
            addr,
            shutdown,
            task,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Signal shutdown and wait for the serving task to finish.
    pub async fn stop(self) -> Result<(), ServerError> {
        let _ = self.shutdown.send(());
        self.task.await??;
        tracing::info!(addr = %self.addr, "bird server stopped");
        Ok(())
    }
}
