//! The todo record and the shapes the record store exchanges.
//!
//! # Design
//! `TodoRecord` is the only entity. The store owns id generation, so a record
//! that has not been persisted yet is a `NewTodo` (no id). `list` works on
//! projections: `ProjectedRecord` carries whichever fields were requested and
//! is narrowed back into a `TodoRecord` with `TryFrom`.

use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// A persisted todo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: String,
    pub description: String,
    pub status: String,
}

/// Field values for a record the store has not assigned an id to yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    pub description: String,
    pub status: String,
}

/// A column that `RecordStore::list` can project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TodoField {
    Id,
    Description,
    Status,
}

impl TodoField {
    pub const ALL: [TodoField; 3] = [TodoField::Id, TodoField::Description, TodoField::Status];

    pub fn name(self) -> &'static str {
        match self {
            TodoField::Id => "id",
            TodoField::Description => "description",
            TodoField::Status => "status",
        }
    }
}

/// A record as returned by a projected listing. Fields that were not
/// requested are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectedRecord {
    pub id: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl ProjectedRecord {
    /// Project `record` down to `fields`.
    pub fn project(record: &TodoRecord, fields: &[TodoField]) -> Self {
        let pick = |field: TodoField, value: &String| fields.contains(&field).then(|| value.clone());
        Self {
            id: pick(TodoField::Id, &record.id),
            description: pick(TodoField::Description, &record.description),
            status: pick(TodoField::Status, &record.status),
        }
    }
}

impl TryFrom<ProjectedRecord> for TodoRecord {
    type Error = StoreError;

    fn try_from(projected: ProjectedRecord) -> Result<Self, Self::Error> {
        let id = projected.id.ok_or_else(|| StoreError::Projection {
            id: String::from("<unknown>"),
            field: TodoField::Id.name(),
        })?;
        let missing = |field: TodoField| StoreError::Projection {
            id: id.clone(),
            field: field.name(),
        };
        let description = projected
            .description
            .ok_or_else(|| missing(TodoField::Description))?;
        let status = projected.status.ok_or_else(|| missing(TodoField::Status))?;
        Ok(TodoRecord {
            id,
            description,
            status,
        })
    }
}

/// A required value is missing when it is empty or only whitespace.
pub fn is_missing(value: &str) -> bool {
    value.trim().is_empty()
}

/// Names of the required fields that are missing, in declaration order.
pub fn missing_fields(description: &str, status: &str) -> Vec<&'static str> {
    [
        (TodoField::Description, description),
        (TodoField::Status, status),
    ]
    .into_iter()
    .filter(|(_, value)| is_missing(value))
    .map(|(field, _)| field.name())
    .collect()
}
