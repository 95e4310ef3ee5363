use std::{future::Future, sync::Arc};

use axum::Router;
use configs::ServerConfig;
use service::records::{MemoryRecordStore, RecordStore};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes::{self, AppState};

/// Build the application around the given store.
pub fn build_app(records: Arc<dyn RecordStore>) -> Router {
    routes::build_router(AppState::new(records), routes::build_cors())
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(StartupError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(event = "signal_install_failed", error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: bind, serve with an empty in-memory store, stop on Ctrl+C.
pub async fn run(config: ServerConfig) -> Result<(), StartupError> {
    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    let records: Arc<dyn RecordStore> = Arc::new(MemoryRecordStore::new());
    let app = build_app(records);

    info!(%addr, event = "listening", "herd server listening");
    serve(listener, app, shutdown_signal()).await
}
