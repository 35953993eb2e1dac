//! Repository implementations for database access

pub mod items;

pub use items::{DbError, ItemRepo, ItemRow, ItemStore};
