//! The persistence boundary of the todo service.
//!
//! # Design
//! The service never reaches for ambient storage. It is handed an
//! `Arc<dyn RecordStore>` and performs exactly one logical store operation per
//! call (update is a load followed by a save). Id generation, isolation and
//! ordering of `list` all belong to the store implementation.

use async_trait::async_trait;

use crate::record::{NewTodo, ProjectedRecord, TodoField, TodoRecord};

/// Failures raised by a `RecordStore` backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// `save` was called for an id the store no longer holds.
    #[error("record {0} does not exist")]
    Missing(String),

    /// A listed record lacked a field the caller projected.
    #[error("record {id} is missing projected field {field}")]
    Projection { id: String, field: &'static str },

    /// The backend could not complete the operation.
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Create/read/update/delete/list for todo records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a new record and return the id the store generated for it.
    async fn create(&self, fields: NewTodo) -> Result<String, StoreError>;

    /// Load a record by id. `None` if no such record exists.
    async fn get(&self, id: &str) -> Result<Option<TodoRecord>, StoreError>;

    /// Overwrite an existing record.
    async fn save(&self, record: &TodoRecord) -> Result<(), StoreError>;

    /// Remove a record permanently. Returns false if it did not exist.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Every record, projected to `fields`. Order is backend-defined.
    async fn list(&self, fields: &[TodoField]) -> Result<Vec<ProjectedRecord>, StoreError>;
}
