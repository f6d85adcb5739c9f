//! Todo record service exposed as remote procedures over HTTP.
//!
//! # Overview
//! `TodoService` implements list/create/update/delete for a single record type
//! on top of an injected `RecordStore`. `rpc` maps each operation onto one
//! `/api/method/...` route; `InMemoryStore` is the bundled backend.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod memory;
pub mod record;
pub mod rpc;
pub mod service;
pub mod store;

pub use config::Config;
pub use error::{RpcError, ServiceError};
pub use memory::InMemoryStore;
pub use record::{NewTodo, ProjectedRecord, TodoField, TodoRecord};
pub use rpc::RpcResponse;
pub use service::TodoService;
pub use store::{RecordStore, StoreError};

/// Router backed by a fresh `InMemoryStore`.
pub fn app() -> Router {
    router(TodoService::new(Arc::new(InMemoryStore::new())))
}

/// Router for an existing service, with request tracing.
pub fn router(service: TodoService) -> Router {
    rpc::router(service)
        .route("/health", get(health_check_handler))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Binds `config.address()` and serves until the process is stopped.
#[tracing::instrument]
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    let address = config.address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("todo service listening on http://{}", address);

    let mut app = app();
    if let Some(origin) = &config.cors_origin {
        app = app.layer(cors_layer(origin)?);
        tracing::info!("allowing cross-origin calls from {}", origin);
    }

    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    if origin.trim() == "*" {
        anyhow::bail!("CORS_ORIGIN cannot be * when credentials are allowed");
    }
    let origin = HeaderValue::from_str(origin)?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

#[tracing::instrument]
async fn health_check_handler() -> &'static str {
    "OK"
}
