mod api;
mod middleware;
mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use jurimap_geocode::GeocodeClient;
use jurimap_poi::{PoiClient, PoiClientConfig};
use jurimap_search::{Aggregator, SearchService};

use crate::api::{build_app, AppState};
use crate::store::SearchStore;

/// Upper bound on results held in memory before the oldest is evicted.
const STORE_CAPACITY: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(jurimap_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let categories = if config.categories_path.exists() {
        jurimap_core::load_categories(&config.categories_path)?
    } else {
        tracing::info!(
            path = %config.categories_path.display(),
            "categories file not found, using built-in registry"
        );
        jurimap_core::default_categories()
    };
    tracing::info!(count = categories.len(), "category registry loaded");

    let geocode = GeocodeClient::new(
        &config.geocoder_url,
        config.geocoder_timeout_secs,
        &config.user_agent,
    )?;
    let poi = PoiClient::new(&PoiClientConfig {
        base_url: config.poi_url.clone(),
        timeout_secs: config.poi_timeout_secs,
        user_agent: config.user_agent.clone(),
        max_retries: config.poi_max_retries,
        backoff_base_secs: config.poi_backoff_base_secs,
        server_timeout_secs: config.poi_server_timeout_secs,
        max_results: config.poi_max_results,
    })?;
    let service = SearchService::new(
        geocode,
        Aggregator::new(poi, config.inter_category_delay_ms),
        categories,
        config.country_codes.clone(),
        config.default_radius_km,
        config.max_radius_km,
    );

    let app = build_app(AppState {
        service: Arc::new(service),
        store: SearchStore::new(STORE_CAPACITY),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
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

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
