//! Full RPC lifecycle test against a live todo server.
//!
//! # Design
//! Starts the server on a random port, then exercises every client operation
//! over real HTTP using ureq. Validates that request building and response
//! parsing work end-to-end with the actual server.

use todo_core::{
    split_completed, ApiError, CreateTodo, HttpMethod, HttpResponse, TodoClient, UpdateTodo,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: todo_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn rpc_lifecycle() {
    // Step 1: start the server on a random port.
    let addr = start_server();
    let client = TodoClient::new(&format!("http://{addr}"));

    // Step 2: list, should be empty.
    let todos = client.parse_get_todos(execute(client.build_get_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // Step 3: create a todo.
    let req = client.build_create_todo(&CreateTodo::in_progress("Buy milk")).unwrap();
    let id = client.parse_create_todo(execute(req)).unwrap();
    assert!(!id.is_empty());

    // Step 4: list shows it with both fields.
    let todos = client.parse_get_todos(execute(client.build_get_todos())).unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, id);
    assert_eq!(todos[0].description, "Buy milk");
    assert_eq!(todos[0].status, "in progress");

    // Step 5: update description only.
    let update = UpdateTodo {
        id: id.clone(),
        description: Some("Buy oat milk".to_string()),
        status: None,
    };
    let req = client.build_update_todo(&update).unwrap();
    assert_eq!(client.parse_update_todo(execute(req)).unwrap(), id);

    // Step 6: mark completed.
    let req = client.build_update_todo(&UpdateTodo::mark_completed(&id)).unwrap();
    assert_eq!(client.parse_update_todo(execute(req)).unwrap(), id);

    let todos = client.parse_get_todos(execute(client.build_get_todos())).unwrap();
    let (pending, completed) = split_completed(todos);
    assert!(pending.is_empty());
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].description, "Buy oat milk");

    // Step 7: delete echoes the id.
    let req = client.build_delete_todo(&id);
    assert_eq!(client.parse_delete_todo(execute(req)).unwrap(), id);

    // Step 8: update after delete is NotFound.
    let req = client.build_update_todo(&UpdateTodo::mark_completed(&id)).unwrap();
    let err = client.parse_update_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 9: delete again is NotFound.
    let err = client.parse_delete_todo(execute(client.build_delete_todo(&id))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 10: list is empty again.
    let todos = client.parse_get_todos(execute(client.build_get_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list after delete");
}

#[test]
fn rejects_blank_fields() {
    let addr = start_server();
    let client = TodoClient::new(&format!("http://{addr}"));

    let input = CreateTodo {
        description: "desc".to_string(),
        status: String::new(),
    };
    let req = client.build_create_todo(&input).unwrap();
    let err = client.parse_create_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::Validation(msg) if msg.contains("status")));

    let todos = client.parse_get_todos(execute(client.build_get_todos())).unwrap();
    assert!(todos.is_empty());
}
