//! Stateless HTTP request builder and response parser for the todo RPC API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each remote procedure is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Envelope, ErrorBody, Todo, UpdateTodo};

const GET_TODOS: &str = "/api/method/todo_app.todo_app.api.todo.get_todos";
const CREATE_TODO: &str = "/api/method/todo_app.todo_app.api.todo.create_todo";
const UPDATE_TODO: &str = "/api/method/todo_app.todo_app.api.todo.update_todo";
const DELETE_TODO: &str = "/api/method/todo_app.todo_app.api.todo.delete_todo";

/// Synchronous, stateless client for the todo RPC API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_get_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{GET_TODOS}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, CREATE_TODO, input)
    }

    pub fn build_update_todo(&self, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, UPDATE_TODO, input)
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("id", id)
            .finish();
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}{DELETE_TODO}?{query}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_get_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        unwrap_message(response)
    }

    /// Returns the id the server generated.
    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        unwrap_message(response)
    }

    /// Returns the id of the updated todo.
    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        unwrap_message(response)
    }

    /// Returns the id of the deleted todo.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        unwrap_message(response)
    }

    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        route: &str,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{route}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Check the status, then pull the result out of the `message` envelope.
fn unwrap_message<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str::<Envelope<T>>(&response.body)
        .map(|envelope| envelope.message)
        .map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map a non-200 response to the matching `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    if let Ok(error) = serde_json::from_str::<ErrorBody>(&response.body) {
        match error.exc_type.as_str() {
            "ValidationError" => return Err(ApiError::Validation(error.exception)),
            "NotFoundError" => return Err(ApiError::NotFound),
            "StoreError" => return Err(ApiError::Store(error.exception)),
            _ => {}
        }
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
