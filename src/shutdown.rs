use actix_web::dev::ServerHandle;
use sqlx::{Pool, Postgres};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Handles graceful shutdown of the application
///
/// This module orchestrates graceful shutdown by:
/// 1. Listening for shutdown signals (SIGTERM, SIGINT/CTRL+C)
/// 2. Stopping the HTTP server (stops accepting new requests)
/// 3. Waiting for in-flight requests to complete
/// 4. Closing database connections
pub struct ShutdownCoordinator {
    server_handle: ServerHandle,
    server_task: JoinHandle<Result<(), std::io::Error>>,
    pool: Pool<Postgres>,
}

impl ShutdownCoordinator {
    pub fn new(
        server_handle: ServerHandle,
        server_task: JoinHandle<Result<(), std::io::Error>>,
        pool: Pool<Postgres>,
    ) -> Self {
        Self {
            server_handle,
            server_task,
            pool,
        }
    }

    /// Wait for shutdown signal and perform graceful shutdown
    ///
    /// This function will block until either:
    /// - CTRL+C is received
    /// - SIGTERM is received (Unix only)
    pub async fn wait_for_shutdown(self) -> Result<(), std::io::Error> {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("Received CTRL+C signal, initiating graceful shutdown...");
            }
            _ = terminate => {
                info!("Received SIGTERM signal, initiating graceful shutdown...");
            }
        }

        self.shutdown().await
    }

    /// Perform the actual shutdown sequence
    async fn shutdown(self) -> Result<(), std::io::Error> {
        // 1. Stop HTTP server (in-flight requests run to completion)
        info!("Stopping HTTP server (no longer accepting new requests)...");
        self.server_handle.stop(true).await;
        info!("HTTP server stopped accepting new requests");

        // 2. Wait for the server task to complete
        info!("Waiting for HTTP server to fully shut down...");
        match self.server_task.await {
            Ok(Ok(_)) => info!("HTTP server shut down successfully"),
            Ok(Err(e)) => error!("HTTP server encountered error during shutdown: {:?}", e),
            Err(e) => error!("HTTP server task panicked: {:?}", e),
        }

        // 3. Close database connections
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connections closed");

        info!("Graceful shutdown completed successfully");
        Ok(())
    }
}
