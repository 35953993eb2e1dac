//! Database layer - store gateway and repositories
//!
//! # Design Principles
//!
//! - One pool, opened at startup and injected; no global handle
//! - List operations use JOINs - no N+1 queries
//! - Rely on DB constraints, handle FK violations - no check-then-insert
//! - Transactions for multi-step operations
//!
//! The schema is owned outside this service; `sql/schema.sql` documents it.

pub mod pool;
pub mod repos;

pub use pool::{StoreConfig, StoreGateway};
pub use repos::*;

