//! Storefront server.
//!
//! Usage: `storefront-gateway [config.yaml]`
//! - Without an argument, `./storefront.yaml` is used if present, otherwise defaults.
//! - Log filter comes from `RUST_LOG` (default `info`).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_core::error::{Result, StorefrontError};
use storefront_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::resolve(std::env::args().nth(1).as_deref())?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::from_config(&cfg)?;
    tracing::info!(
        products = state.catalog().len(),
        instance_id = %state.instance_id(),
        "catalog loaded"
    );
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| StorefrontError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "storefront listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StorefrontError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
