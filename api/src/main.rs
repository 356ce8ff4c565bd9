//! Drones API Server
//!
//! Tracks a fleet of delivery drones and the medications loaded onto them.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{delete, get},
    Json, Router,
};
use sea_orm::{ConnectOptions, Database};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{ensure_schema, PostgresDroneRepository, PostgresMedicationRepository};
use app::{seed_fleet, BatteryAudit, DroneService};
use config::Config;
use domain::ports::{DroneRepository, MedicationRepository};

/// Application state shared across all handlers
pub struct AppState<DR, MR>
where
    DR: DroneRepository,
    MR: MedicationRepository,
{
    pub drone_service: Arc<DroneService<DR, MR>>,
}

// Derived Clone would require DR: Clone and MR: Clone
impl<DR, MR> Clone for AppState<DR, MR>
where
    DR: DroneRepository,
    MR: MedicationRepository,
{
    fn clone(&self) -> Self {
        Self {
            drone_service: self.drone_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router over any pair of repositories
pub fn router<DR, MR>(state: AppState<DR, MR>) -> Router
where
    DR: DroneRepository + 'static,
    MR: MedicationRepository + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        // Drones
        .route(
            "/drones",
            get(handlers::list_drones::<DR, MR>).post(handlers::create_drone::<DR, MR>),
        )
        .route(
            "/drones/:drone_id",
            get(handlers::get_drone::<DR, MR>).delete(handlers::delete_drone::<DR, MR>),
        )
        // Medications (nested under drones)
        .route(
            "/drones/:drone_id/medications",
            get(handlers::list_medications::<DR, MR>)
                .post(handlers::create_medication::<DR, MR>),
        )
        .route(
            "/drones/:drone_id/medications/:medication_id",
            delete(handlers::delete_medication::<DR, MR>),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,drones_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Drones API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(20)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(config.database_debug);
    let db = Database::connect(options).await?;
    ensure_schema(&db).await?;
    tracing::info!("Database connected");

    // Create adapters
    let drone_repo = Arc::new(PostgresDroneRepository::new(db.clone()));
    let medication_repo = Arc::new(PostgresMedicationRepository::new(db.clone()));

    // Create application services
    let drone_service = Arc::new(DroneService::new(
        drone_repo.clone(),
        medication_repo,
        config.loading_policy(),
    ));

    if config.seed {
        seed_fleet(drone_service.as_ref()).await?;
    }

    if config.battery_audit_interval.is_zero() {
        tracing::info!("Battery audit disabled");
    } else {
        BatteryAudit::new(drone_repo).spawn(config.battery_audit_interval);
    }

    let app = router(AppState { drone_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
