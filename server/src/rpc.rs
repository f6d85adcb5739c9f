//! Remote procedures exposed under `/api/method/`.
//!
//! Every procedure answers `{"message": <result>}` on success and an
//! `RpcError` body on failure. `name` is accepted wherever `id` is, since
//! that is what existing callers send as the record key.

use axum::{
    extract::{Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::record::TodoRecord;
use crate::service::TodoService;

pub const GET_TODOS: &str = "/api/method/todo_app.todo_app.api.todo.get_todos";
pub const CREATE_TODO: &str = "/api/method/todo_app.todo_app.api.todo.create_todo";
pub const UPDATE_TODO: &str = "/api/method/todo_app.todo_app.api.todo.update_todo";
pub const DELETE_TODO: &str = "/api/method/todo_app.todo_app.api.todo.delete_todo";

/// Success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse<T> {
    pub message: T,
}

impl<T> RpcResponse<T> {
    fn json(message: T) -> Json<Self> {
        Json(Self { message })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoParams {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoParams {
    #[serde(default, alias = "name")]
    pub id: String,
    pub description: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteTodoParams {
    #[serde(default, alias = "name")]
    pub id: String,
}

pub fn router(service: TodoService) -> Router {
    Router::new()
        .route(GET_TODOS, get(get_todos))
        .route(CREATE_TODO, post(create_todo))
        .route(UPDATE_TODO, put(update_todo))
        .route(DELETE_TODO, delete(delete_todo))
        .with_state(service)
}

#[tracing::instrument(skip(service))]
async fn get_todos(
    State(service): State<TodoService>,
) -> Result<Json<RpcResponse<Vec<TodoRecord>>>, ServiceError> {
    service.list().await.map(RpcResponse::json)
}

#[tracing::instrument(skip(service))]
async fn create_todo(
    State(service): State<TodoService>,
    Json(params): Json<CreateTodoParams>,
) -> Result<Json<RpcResponse<String>>, ServiceError> {
    service
        .create(params.description, params.status)
        .await
        .map(RpcResponse::json)
}

#[tracing::instrument(skip(service))]
async fn update_todo(
    State(service): State<TodoService>,
    Json(params): Json<UpdateTodoParams>,
) -> Result<Json<RpcResponse<String>>, ServiceError> {
    service
        .update(params.id, params.description, params.status)
        .await
        .map(RpcResponse::json)
}

#[tracing::instrument(skip(service))]
async fn delete_todo(
    State(service): State<TodoService>,
    Query(params): Query<DeleteTodoParams>,
) -> Result<Json<RpcResponse<String>>, ServiceError> {
    service.delete(params.id).await.map(RpcResponse::json)
}
