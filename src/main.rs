mod config;
mod error;
mod handlers;
mod logger;
mod metrics;
mod models;

use std::sync::Arc;
use axum::{middleware, routing::{get, Router}};
use tokio::net::TcpListener;
use config::{EnvSource, ProcessEnv, ServerConfig};
use error::ServerError;
use metrics::Metrics;

// shared by every handler; nothing in here is mutated except the atomic counters
#[derive(Clone)]
pub struct AppState {
    pub env: Arc<dyn EnvSource>,
    pub metrics: Arc<Metrics>,
    pub log_path: Option<String>
}

impl AppState {

    pub fn new(env: Arc<dyn EnvSource>, log_path: Option<String>) -> Self {

        AppState {
            env,
            metrics: Arc::new(Metrics::new()),
            log_path
        }

    }

}

pub fn app(state: AppState) -> Router {

    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::readiness))
        .route("/livez", get(handlers::liveness))
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::from_fn_with_state(state.clone(), handlers::track_request))
        .with_state(state)

}

#[tokio::main]
async fn main() -> Result<(), ServerError> {

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let state = AppState::new(Arc::new(ProcessEnv), config.log_path.clone());

    let listener = TcpListener::bind(config.addr).await
        .map_err(|source| ServerError::Bind { addr: config.addr, source })?;

    match listener.local_addr() {
        Ok(addr) => tracing::info!("listening on {}", addr),
        Err(e) => tracing::warn!("could not read local address: {}", e)
    }
    match &config.log_path {
        Some(path) => tracing::info!("request log: {}", path),
        None => tracing::info!("request log disabled")
    }

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server stopped");
    Ok(())

}

async fn shutdown_signal() {

    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => { signal.recv().await; }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
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

    tracing::info!("shutdown signal received, draining connections");

}
