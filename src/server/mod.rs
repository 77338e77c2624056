//! HTTP backend: form actions, API proxies and the task table

pub mod completions;
mod routes;
pub mod shell;
mod state;

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::config::AppConfig;
use routes::{
    create_task_handler, delete_task_handler, form_action_handler, form_config_handler,
    get_task_handler, list_tasks_handler, open_ai_handler, shell_handler, update_task_handler,
};
pub use state::ServerState;

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/forms/{kind}",
            get(form_config_handler).post(form_action_handler),
        )
        .route("/api/open-ai", get(open_ai_handler))
        .route("/api/shell", get(shell_handler))
        .route("/api/tasks", get(list_tasks_handler).post(create_task_handler))
        .route(
            "/api/tasks/{id}",
            get(get_task_handler)
                .patch(update_task_handler)
                .delete(delete_task_handler),
        )
        .layer(cors)
        .with_state(state)
}

/// Run the backend until Ctrl+C or SIGTERM
pub async fn start_server(config: &AppConfig, address: Option<String>) -> Result<()> {
    info!("Initializing state...");
    let state = ServerState::new(config);

    let address = address.unwrap_or_else(|| config.server_address());
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// State with mocked proxy backends that expect no calls
#[cfg(test)]
pub fn test_state() -> Arc<ServerState> {
    ServerState::with_backends(
        Arc::new(completions::MockCompletionsApi::new()),
        Arc::new(shell::MockShellRunner::new()),
    )
}
