mod analysis;
mod catalog;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{RoleCatalog, StaticRoleCatalog};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Initialize role catalog (built-in unless ROLE_CATALOG_PATH is set)
    let catalog = load_catalog(&config)?;
    info!("Serving roles: {:?}", catalog.role_names());

    let state = AppState {
        config: config.clone(),
        catalog,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_catalog(config: &Config) -> Result<Arc<dyn RoleCatalog>> {
    let catalog = match &config.role_catalog_path {
        Some(path) => {
            info!("Loading role catalog from {}", path.display());
            StaticRoleCatalog::from_path(path)
                .with_context(|| format!("Failed to load role catalog from {}", path.display()))?
        }
        None => StaticRoleCatalog::builtin(),
    };
    info!("Role catalog loaded ({} roles)", catalog.len());
    Ok(Arc::new(catalog))
}
