//! itemctl-server: HTTP item service
//!
//! Lists items (joined with their category and curriculum names) and
//! creates new ones with time-ordered identifiers. Everything is served on
//! `/`, dispatched by method.

pub mod db;
pub mod http;
pub mod ids;
pub mod lifecycle;
pub mod models;

pub use db::{ItemRepo, ItemStore, StoreConfig, StoreGateway};
pub use http::{run_server, ServerConfig};
pub use ids::IdGenerator;
