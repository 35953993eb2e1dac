//! Time-ordered identifiers for items
//!
//! Identifiers are ULIDs: 26 Crockford base32 characters, millisecond
//! timestamp prefix, random suffix. Within a process the generator is
//! monotonic, so identifiers minted in the same millisecond still sort in
//! creation order.

use std::fmt;
use std::sync::{Arc, Mutex};

use ulid::{Generator, Ulid};

/// Length of a rendered identifier.
pub const ID_LEN: usize = 26;

/// Identifier generation error
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// Random component overflowed within a single millisecond
    #[error("identifier space exhausted for the current millisecond")]
    Exhausted(#[from] ulid::MonotonicError),

    #[error("identifier generator lock poisoned")]
    Poisoned,
}

/// Shared monotonic ULID generator.
///
/// Cloning is cheap; all clones draw from the same sequence.
#[derive(Clone)]
pub struct IdGenerator {
    inner: Arc<Mutex<Generator>>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Generator::new())),
        }
    }

    /// Produce the next identifier, strictly greater than every previous one
    /// from this generator.
    pub fn next_id(&self) -> Result<Ulid, IdError> {
        let mut generator = self.inner.lock().map_err(|_| IdError::Poisoned)?;
        Ok(generator.generate()?)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}
