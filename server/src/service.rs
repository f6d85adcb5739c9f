//! Stateless todo operations over an injected `RecordStore`.
//!
//! # Design
//! `TodoService` holds nothing but a shared handle to the store, so clones are
//! cheap and any number of callers may use it concurrently. Each operation is
//! one unit of work; store failures are returned to the caller untouched
//! (apart from `StoreError::Missing`, which is reported as `NotFound`).
//! Nothing is retried.

use std::sync::Arc;

use crate::error::ServiceError;
use crate::record::{self, NewTodo, TodoField, TodoRecord};
use crate::store::RecordStore;

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn RecordStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// All todos with their id, description and status.
    ///
    /// Ordering is whatever the store returns.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<TodoRecord>, ServiceError> {
        let projected = self.store.list(&TodoField::ALL).await?;
        let records = projected
            .into_iter()
            .map(TodoRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Creates a todo and returns its generated id.
    ///
    /// # Errors
    ///
    /// `Validation` if `description` or `status` is blank, `Store` if the
    /// record could not be persisted.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, description: String, status: String) -> Result<String, ServiceError> {
        ensure_required(&description, &status)?;
        let id = self
            .store
            .create(NewTodo {
                description,
                status,
            })
            .await?;
        tracing::info!(%id, "todo created");
        Ok(id)
    }

    /// Overwrites the given fields of an existing todo and returns its id.
    ///
    /// A field is applied only when it is present and non-empty; `None` and
    /// `""` both leave the stored value alone. With nothing to apply the
    /// record is saved unchanged.
    ///
    /// # Errors
    ///
    /// `Validation` if `id` is empty or the updated record would have a blank
    /// field, `NotFound` if no todo has `id`, `Store` on persistence failure.
    #[tracing::instrument(skip(self))]
    pub async fn update(
        &self,
        id: String,
        description: Option<String>,
        status: Option<String>,
    ) -> Result<String, ServiceError> {
        ensure_id(&id)?;
        let mut todo = self
            .store
            .get(&id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.clone()))?;

        if let Some(description) = description.filter(|d| !d.is_empty()) {
            todo.description = description;
        }
        if let Some(status) = status.filter(|s| !s.is_empty()) {
            todo.status = status;
        }
        ensure_required(&todo.description, &todo.status)?;

        self.store.save(&todo).await?;
        Ok(todo.id)
    }

    /// Permanently removes a todo and echoes its id.
    ///
    /// # Errors
    ///
    /// `Validation` if `id` is empty, `NotFound` if no todo has `id`, `Store`
    /// on persistence failure.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: String) -> Result<String, ServiceError> {
        ensure_id(&id)?;
        if !self.store.delete(&id).await? {
            return Err(ServiceError::NotFound(id));
        }
        tracing::info!(%id, "todo deleted");
        Ok(id)
    }
}

fn ensure_required(description: &str, status: &str) -> Result<(), ServiceError> {
    let missing = record::missing_fields(description, status);
    if missing.is_empty() {
        return Ok(());
    }
    Err(ServiceError::Validation(format!(
        "value missing for todo: {}",
        missing.join(", ")
    )))
}

fn ensure_id(id: &str) -> Result<(), ServiceError> {
    if id.is_empty() {
        return Err(ServiceError::Validation("id is required".to_string()));
    }
    Ok(())
}
