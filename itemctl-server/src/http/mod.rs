//! HTTP server layer
//!
//! Axum server with:
//! - Fixed CORS headers on every response
//! - Request tracing
//! - Graceful shutdown via cancellation token
//! - JSON error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, serve, AppState, ServerConfig, ServerError};
