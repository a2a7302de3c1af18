//! Persisted entities
//!
//! Domain records are validated before they ever reach the store and carry no
//! identity of their own. Once the store assigns one, the pair travels as an
//! `Entity`.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A validated record together with its store-assigned identity
///
/// Dereferences to the record, so accessors of the wrapped type are available
/// directly on the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity<I, T> {
    /// Identity assigned by the store
    pub id: I,
    /// The validated record
    #[serde(flatten)]
    pub record: T,
}

impl<I, T> Entity<I, T> {
    /// Pairs an identity with its record
    pub fn new(id: I, record: T) -> Self {
        Self { id, record }
    }

    /// Discards the identity and returns the record
    pub fn into_record(self) -> T {
        self.record
    }
}

impl<I, T> Deref for Entity<I, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.record
    }
}
