use todo_api::application::todo_service::TodoServiceImpl;
use todo_api::config::Config;
use todo_api::http::routes::todos;
use todo_api::http::routing;
use todo_api::infrastructure::memory_repo::MemoryRepository;
use todo_api::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    server::init_tracing();

    let config = Config::from_env()?;
    let service = TodoServiceImpl::new(MemoryRepository::new());
    let router = routing::app(todos::router(todos::AppState { service }));

    server::serve(&config, router).await
}
