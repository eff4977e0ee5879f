//! Backend entry-point: wires the dataset, the query endpoint, and health
//! probes.

mod server;

use std::io;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::dataset;
use backend::domain::ports::CachedDirectoryQuery;
use backend::inbound::http::health::HealthState;
use server::{DirectorySettings, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DirectorySettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("configuration failed to load: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| io::Error::other(format!("invalid bind address: {e}")))?;
    let source = settings.dataset_source();

    // Load eagerly so a broken resource aborts startup rather than the
    // first request.
    let records = dataset::load(&source)
        .map_err(|e| io::Error::other(format!("dataset load failed: {e}")))?;
    info!(records = records.len(), addr = %bind_addr, "application started");

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, Arc::new(CachedDirectoryQuery::new(source)));
    let server = server::create_server(health_state, config)?;
    server.await
}
