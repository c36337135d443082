mod api;
mod middleware;

use std::sync::Arc;

use packslip_tracking::{CorreosClient, ShopifyClient, TrackingService};
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = packslip_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let tracking = config.tracking()?;
    let shopify = ShopifyClient::new(
        &tracking.store_domain,
        &tracking.access_token,
        config.http_timeout_secs,
        &config.user_agent,
    )?;
    let correos = CorreosClient::new(
        &tracking.client_id,
        &tracking.secret,
        config.http_timeout_secs,
        &config.user_agent,
    )?;
    let service = TrackingService::new(shopify, correos, config.carrier_filter.clone());

    let app = build_app(AppState {
        service: Arc::new(service),
    });

    tracing::info!(addr = %config.bind_addr, "starting packslip server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, stopping server");
}
