//! Domain DTOs for the todo RPC API.
//!
//! # Design
//! These types mirror the server's wire schema but are defined independently,
//! so the client does not depend on Axum or the server's storage types.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Status given to freshly added todos by the reference front end.
pub const STATUS_IN_PROGRESS: &str = "in progress";

/// Status that marks a todo as done.
pub const STATUS_COMPLETED: &str = "completed";

/// A single todo item returned by `todo.get_todos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub description: String,
    pub status: String,
}

impl Todo {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}

/// Parameters for `todo.create_todo`. Both fields are required by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub description: String,
    pub status: String,
}

impl CreateTodo {
    pub fn in_progress(description: &str) -> Self {
        Self {
            description: description.to_string(),
            status: STATUS_IN_PROGRESS.to_string(),
        }
    }
}

/// Parameters for `todo.update_todo`. Omitted fields, and fields sent as an
/// empty string, remain unchanged on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UpdateTodo {
    pub fn mark_completed(id: &str) -> Self {
        Self {
            id: id.to_string(),
            description: None,
            status: Some(STATUS_COMPLETED.to_string()),
        }
    }
}

/// Success envelope wrapping every RPC result.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope<T> {
    pub message: T,
}

/// Error body the server returns for failed calls.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub exc_type: String,
    #[serde(default)]
    pub exception: String,
}

/// Split todos into (pending, completed), preserving order within each half.
pub fn split_completed(todos: Vec<Todo>) -> (Vec<Todo>, Vec<Todo>) {
    let (completed, pending): (Vec<Todo>, Vec<Todo>) =
        todos.into_iter().partition(Todo::is_completed);
    (pending, completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, status: &str) -> Todo {
        Todo {
            id: id.to_string(),
            description: format!("todo {id}"),
            status: status.to_string(),
        }
    }

    #[test]
    fn split_completed_keeps_order() {
        let todos = vec![
            todo("a", STATUS_IN_PROGRESS),
            todo("b", STATUS_COMPLETED),
            todo("c", "blocked"),
            todo("d", STATUS_COMPLETED),
        ];
        let (pending, completed) = split_completed(todos);
        let ids = |v: &[Todo]| v.iter().map(|t| t.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&pending), vec!["a", "c"]);
        assert_eq!(ids(&completed), vec!["b", "d"]);
    }

    #[test]
    fn helpers_use_front_end_statuses() {
        assert_eq!(CreateTodo::in_progress("x").status, "in progress");
        let update = UpdateTodo::mark_completed("T-1");
        assert_eq!(update.id, "T-1");
        assert_eq!(update.status.as_deref(), Some("completed"));
        assert!(update.description.is_none());
    }

    #[test]
    fn update_skips_absent_fields() {
        let json = serde_json::to_value(UpdateTodo::mark_completed("T-1")).unwrap();
        assert_eq!(json, serde_json::json!({"id": "T-1", "status": "completed"}));
    }
}
