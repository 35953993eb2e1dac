//! Axum server setup
//!
//! Server skeleton with:
//! - Fixed-origin CORS headers on every response
//! - Tracing middleware
//! - Graceful shutdown when the cancellation token fires

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::repos::ItemStore;

/// Origin allowed by default (local frontend dev server)
pub const DEFAULT_ALLOW_ORIGIN: &str = "http://localhost:3000";

/// Port used when none is configured
pub const DEFAULT_PORT: u16 = 8000;

const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8000)
    pub bind_addr: SocketAddr,

    /// Value of `Access-Control-Allow-Origin` on every response
    pub allow_origin: HeaderValue,
}

impl ServerConfig {
    /// Build a config, validating `allow_origin` as a header value.
    pub fn new(bind_addr: SocketAddr, allow_origin: &str) -> Result<Self, ServerError> {
        let allow_origin = HeaderValue::from_str(allow_origin)
            .map_err(|_| ServerError::InvalidOrigin(allow_origin.to_owned()))?;
        Ok(Self {
            bind_addr,
            allow_origin,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            allow_origin: HeaderValue::from_static(DEFAULT_ALLOW_ORIGIN),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemStore>,
}

impl AppState {
    pub fn new(items: Arc<dyn ItemStore>) -> Self {
        Self { items }
    }
}

/// Build the application router.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    routes::items::router()
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            config.allow_origin.clone(),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `config.bind_addr` and serve until `shutdown` is cancelled.
///
/// # Example
///
/// ```ignore
/// let gateway = StoreGateway::open(&store_config).await?;
/// let repo = ItemRepo::new(gateway.pool().clone(), IdGenerator::new());
/// let token = CancellationToken::new();
/// run_server(Arc::new(repo), ServerConfig::default(), token).await?;
/// gateway.close().await;
/// ```
pub async fn run_server(
    items: Arc<dyn ItemStore>,
    config: ServerConfig,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    let app = build_router(AppState::new(items), &config);
    serve(listener, app, shutdown).await
}

/// Serve `app` on an already-bound listener until `shutdown` is cancelled.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid CORS origin: {0:?}")]
    InvalidOrigin(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.allow_origin, "http://localhost:3000");
    }

    #[test]
    fn rejects_unprintable_origin() {
        let addr = SocketAddr::from(([127, 0, 0, 1], 8000));
        assert!(ServerConfig::new(addr, "https://ok.example").is_ok());
        assert!(matches!(
            ServerConfig::new(addr, "bad\norigin"),
            Err(ServerError::InvalidOrigin(_))
        ));
    }
}
