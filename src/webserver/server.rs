/// Axum webserver implementation
///
/// Server lifecycle: client warm-up, binding, serving and graceful shutdown
use axum::{middleware, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::compression::CompressionLayer;

use crate::{
    clob::ClientHandle,
    config::ServerConfig,
    logger::{self, LogTag},
    webserver::{routes, state::AppState},
};

/// Global shutdown notifier
static SHUTDOWN_NOTIFY: once_cell::sync::Lazy<Arc<Notify>> =
    once_cell::sync::Lazy::new(|| Arc::new(Notify::new()));

/// Start the webserver
///
/// Blocks until the server is shut down. The trading client is not required
/// to be constructible here; a failed warm-up is retried by the first
/// request that needs it.
pub async fn start_server(config: ServerConfig, client: ClientHandle) -> Result<(), String> {
    if config.warm_up_client {
        logger::debug(LogTag::Webserver, "Warming up trading client...");
        client.warm_up().await;
    }

    let state = AppState::shared(client);
    let app = build_app(Arc::clone(&state));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| format!("Invalid bind address {}:{}: {}", config.host, config.port, e))?;

    let listener = TcpListener::bind(&addr).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::AddrInUse => format!(
            "Failed to bind to {}: Address already in use\n\
             \n\
             Another bridge instance may already be running.\n\
             Set CLOB_BRIDGE_PORT or pass --port to use a different port.",
            addr
        ),
        std::io::ErrorKind::PermissionDenied => format!(
            "Failed to bind to {}: Permission denied\n\
             \n\
             Port {} requires elevated privileges on this system.\n\
             Consider using a port above 1024.",
            addr, config.port
        ),
        _ => format!("Failed to bind to {}: {}", addr, e),
    })?;

    logger::info(
        LogTag::Webserver,
        &format!("✅ CLOB bridge listening on http://{}", addr),
    );

    let shutdown_signal = async {
        SHUTDOWN_NOTIFY.notified().await;
        logger::info(
            LogTag::Webserver,
            "Received shutdown signal, stopping webserver...",
        );
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    logger::info(
        LogTag::Webserver,
        &format!(
            "✅ Webserver stopped gracefully after {}s",
            state.uptime_seconds()
        ),
    );

    Ok(())
}

/// Trigger webserver shutdown
///
/// Safe to call before the server awaits the signal; the permit is kept.
pub fn shutdown() {
    logger::debug(LogTag::Webserver, "Triggering webserver shutdown...");
    SHUTDOWN_NOTIFY.notify_one();
}

/// Build the Axum application with all routes and middleware
pub fn build_app(state: Arc<AppState>) -> Router {
    routes::create_router(state)
        .layer(middleware::from_fn(crate::webserver::middleware::log_requests))
        .layer(CompressionLayer::new())
}
