//! Storage abstraction for saved plans.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use crate::plan::{Plan, PlanError};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Plan not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

impl From<PlanError> for StorageError {
    fn from(err: PlanError) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future returned by storage backends.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Backend that keeps plans under string ids.
///
/// Loading never validates company references, same as a JSON import.
pub trait Storage: Send + Sync {
    /// Save a plan, replacing any plan stored under the same id.
    fn save(&self, id: &str, plan: &Plan) -> BoxFuture<'_, StorageResult<()>>;

    /// Load a plan.
    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<Plan>>;

    /// Delete a plan. Deleting a missing id is not an error.
    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List stored plan ids, sorted.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check if a plan exists.
    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}
