//! Durable keyed storage, one collection per resource kind.

pub mod backend;
pub mod memory;
pub mod postgres;
pub mod seed;

use std::fmt;
use std::future::Future;

use crate::models::ResourceKind;

pub use backend::{Backend, MemoryBacked, MemoryStores};
pub use memory::MemoryStore;

#[derive(Debug)]
pub enum StoreError {
    NotFound(i64),
    Db(sqlx::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "No record with id {id}"),
            StoreError::Db(e) => write!(f, "Database error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Db(e)
    }
}

/// Storage operations for one resource kind.
///
/// `list` is ordered newest `created_at` first. `create` assigns the id and
/// the creation time and forces the initial status. `update` has patch
/// semantics. Both `update` and `delete` fail with [`StoreError::NotFound`]
/// for an unknown id.
pub trait ResourceStore<K: ResourceKind> {
    fn list(&self) -> impl Future<Output = Result<Vec<K::Record>, StoreError>>;

    fn create(&self, new: K::NewRecord) -> impl Future<Output = Result<K::Record, StoreError>>;

    fn update(
        &self,
        id: i64,
        patch: K::Patch,
    ) -> impl Future<Output = Result<K::Record, StoreError>>;

    fn delete(&self, id: i64) -> impl Future<Output = Result<(), StoreError>>;
}
