#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let config = todo_server::Config::from_env()?;
    todo_server::start_server(config).await
}
