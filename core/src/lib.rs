//! Synchronous API client core for the todo RPC service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the actual HTTP round-trip,
//! making the core fully deterministic and testable.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each remote procedure is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Results arrive wrapped in a `{"message": ...}` envelope; `parse_*`
//!   unwraps it and maps error bodies onto `ApiError`.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{split_completed, CreateTodo, Todo, UpdateTodo, STATUS_COMPLETED, STATUS_IN_PROGRESS};
