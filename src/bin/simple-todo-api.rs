use todo_api::application::simple_todo_service::SimpleTodoServiceImpl;
use todo_api::config::Config;
use todo_api::http::routes::simple_todos;
use todo_api::http::routing;
use todo_api::infrastructure::memory_repo::MemoryRepository;
use todo_api::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    server::init_tracing();

    let config = Config::from_env()?;
    let service = SimpleTodoServiceImpl::new(MemoryRepository::new());
    let router = routing::app(simple_todos::router(simple_todos::AppState { service }));

    server::serve(&config, router).await
}
