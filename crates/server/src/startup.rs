use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServerConfig, StorageBackend};
use migration::MigratorTrait;
use service::car::{repo::{memory::InMemoryCarRepository, seaorm::SeaOrmCarRepository}, CarRepository};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}:{}: {e}", server.host, server.port)))
}

/// Build the configured storage backend. The database backend applies
/// pending migrations before returning.
pub async fn build_repository(cfg: &AppConfig) -> anyhow::Result<Arc<dyn CarRepository>> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            warn!("storage.backend = memory; cars are lost on restart");
            Ok(Arc::new(InMemoryCarRepository::new()))
        }
        StorageBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None).await?;
            info!("database migrations applied");
            Ok(Arc::new(SeaOrmCarRepository::new(db)))
        }
    }
}

/// Router over an already built repository.
pub fn app(repo: Arc<dyn CarRepository>) -> Router {
    routes::build_router(ServerState::from_repository(repo), build_cors())
}

/// Serve the car API with an already loaded and validated config. Logging
/// must be installed by the caller.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let repo = build_repository(&cfg).await?;
    let app = app(repo);

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, backend = ?cfg.storage.backend, "starting car registry server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
