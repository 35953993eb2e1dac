//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod item;
pub mod text;
pub mod validation;

pub use item::{CreateItemRequest, NewItem};
pub use text::ItemText;
pub use validation::ValidationError;
