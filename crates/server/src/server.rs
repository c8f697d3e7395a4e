//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (request id, logging, timeout, compression, CORS, panics)
//! - Dataset reload on SIGHUP
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::middleware::{log_requests, request_id, timeout_as_error};
use crate::routes::{api_info, not_found};
use crate::routes::{catalog, health, professionals, search};
use crate::state::ServerState;
use axum::http::StatusCode;
use axum::middleware::{from_fn, map_response};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Middleware stack (outermost first):
/// 1. HTTP tracing
/// 2. Request ID tracking
/// 3. Request logging and metrics
/// 4. CORS
/// 5. Compression
/// 6. Timeout handling (408 with the standard error body)
/// 7. Panic to 500 conversion
pub fn build_router(state: Arc<ServerState>) -> Router {
    // CORS layer
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(AnyOrigin)
            .allow_methods(AnyOrigin)
            .allow_headers(AnyOrigin)
    } else {
        CorsLayer::new()
    };

    // Operational routes
    let ops_routes = Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics));

    // Directory routes
    let directory_routes = Router::new()
        .route("/professionals", get(professionals::list_professionals))
        .route("/professionals/{id}", get(professionals::get_professional))
        .route("/specialties", get(catalog::list_specialties))
        .route("/search", get(search::search_professionals))
        .route("/statistics", get(catalog::statistics));

    Router::new()
        .merge(ops_routes)
        .merge(directory_routes)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(map_response(timeout_as_error))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Converts a handler panic into a generic 500; the payload only goes to the log.
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    ServerError::Internal(format!("handler panicked: {detail}")).into_response()
}

/// Start the carelist HTTP server
///
/// Initializes logging and state from `config` and serves until SIGTERM or
/// Ctrl+C.
///
/// # Example
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
///
/// # Initialization
///
/// 1. Records the start time reported as uptime by `/health` and `/ready`,
///    then sets up structured JSON logging with the configured log level
/// 2. Installs the Prometheus recorder when metrics are enabled
/// 3. Loads the dataset (an unreadable dataset yields an empty directory)
/// 4. Binds to the configured TCP address and serves with graceful shutdown
///
/// # Signals
///
/// - SIGHUP (Unix): reload the dataset, keeping the current one on failure
/// - SIGTERM (Unix) / Ctrl+C: graceful shutdown
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    health::mark_started();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .init();

    let mut state = ServerState::new(config.clone());
    if config.metrics_enabled {
        let handle = PrometheusBuilder::new().install_recorder()?;
        state = state.with_metrics(handle);
    }
    let state = Arc::new(state);

    #[cfg(unix)]
    tokio::spawn(reload_on_hangup(Arc::clone(&state)));

    let app = build_router(Arc::clone(&state));

    // Parse bind address
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(
        addr = %addr,
        dataset = %config.dataset_path.display(),
        records = state.store.snapshot().len(),
        "Starting carelist server"
    );
    tracing::info!(
        timeout_secs = config.timeout_secs,
        cors = config.enable_cors,
        metrics = config.metrics_enabled,
        "Server options"
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Reload the dataset every time the process receives SIGHUP
#[cfg(unix)]
async fn reload_on_hangup(state: Arc<ServerState>) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(stream) => stream,
        Err(err) => {
            tracing::warn!(error = %err, "SIGHUP handler unavailable, dataset reload disabled");
            return;
        }
    };

    while hangup.recv().await.is_some() {
        tracing::info!("Received SIGHUP, reloading dataset");

        let reload_state = Arc::clone(&state);
        match tokio::task::spawn_blocking(move || reload_state.reload()).await {
            Ok(Ok(count)) => tracing::info!(records = count, "Dataset reload complete"),
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "Dataset reload failed, keeping current dataset")
            }
            Err(err) => tracing::error!(error = %err, "Dataset reload task failed"),
        }
    }
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
