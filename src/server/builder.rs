//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::BoardConfig;
use crate::core::source::RecordSource;
use crate::core::store::{FetchOutcome, RecordStore};
use crate::sources;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the rental board HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(BoardConfig::from_yaml_file("board.yaml")?)
///     .serve("127.0.0.1:3000")
///     .await?;
/// ```
pub struct ServerBuilder {
    config: BoardConfig,
    source: Option<Arc<dyn RecordSource>>,
    store: Option<Arc<RecordStore>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            config: BoardConfig::default(),
            source: None,
            store: None,
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this source instead of the one described by the config
    pub fn with_source(mut self, source: impl RecordSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Share an existing store (pre-loaded in tests, or observed elsewhere)
    pub fn with_store(mut self, store: Arc<RecordStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        self.config.validate()?;

        let source = match self.source.take() {
            Some(source) => source,
            None => sources::from_config(&self.config.source)?,
        };
        let store = self.store.take().unwrap_or_default();

        Ok(ServerHost::new(self.config, store, source))
    }

    /// Build the final REST router
    ///
    /// The store is not loaded here; call [`ServerHost::refresh`] or
    /// `POST /rentals/refresh`, or use [`serve`](Self::serve) which loads
    /// before listening.
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Run the initial fetch (a failure leaves the board empty)
    /// - Bind to the provided address
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(mut self, addr: &str) -> Result<()> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);

        if let FetchOutcome::Failed { error, .. } = host.refresh().await {
            tracing::warn!(error = %error, "starting with an empty board");
        }

        let app = RestExposure::build_router(host, custom_routes)?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
