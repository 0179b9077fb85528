use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::CorsLayer;

use taskdeck_service::TodoService;

use crate::handlers::{self, AppState};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 5000,
        }
    }
}

/// Build the router with all routes. Static segments (`reorder`,
/// `sort/date`, `status`) take precedence over the `{id}` capture.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route("/api/todos/status/{token}", get(handlers::todos_by_status))
        .route("/api/todos/reorder", put(handlers::reorder_todos))
        .route("/api/todos/sort/date", put(handlers::sort_by_date))
        .route("/api/stats", get(handlers::stats))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Create and start the server. Returns a handle exposing the bound port.
pub async fn start(
    config: ServerConfig,
    service: TodoService,
) -> Result<ServerHandle, std::io::Error> {
    let state = AppState { service };
    let router = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(port = local_addr.port(), "taskdeck server started");

    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    Ok(ServerHandle {
        port: local_addr.port(),
        _server: server,
    })
}

/// Handle returned by `start()` — keeps the serve task alive.
pub struct ServerHandle {
    pub port: u16,
    _server: tokio::task::JoinHandle<()>,
}
