//! VesselWatch Backend Server
//!
//! Realtime telemetry backend for the VesselWatch dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    VESSELWATCH BACKEND                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌─────────────┐  ┌───────────────────────┐ │
//! │  │  REST     │  │  Telemetry  │  │  Anomaly Detection    │ │
//! │  │  API      │  │  Stream     │  │  (Rolling Baseline)   │ │
//! │  │  (Axum)   │  │  (WebSocket)│  │                       │ │
//! │  └─────┬─────┘  └──────┬──────┘  └───────────┬───────────┘ │
//! │        └───────────────┼─────────────────────┘             │
//! │                        ▼                                    │
//! │                ┌───────────────┐                           │
//! │                │    Vessel     │                           │
//! │                │   Registry    │                           │
//! │                └───────────────┘                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod models;
mod vessel;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vessel::VesselRegistry;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration first so the environment can pick the log format
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    init_logging(&config);

    tracing::info!("VesselWatch backend starting...");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Stream tick interval: {}ms", config.tick_interval_ms);

    // Build application state
    let registry = match config.simulator_seed {
        Some(seed) => {
            tracing::info!("Simulator running with fixed seed {}", seed);
            VesselRegistry::with_seed(seed)
        }
        None => VesselRegistry::new(),
    };
    let state = AppState {
        registry: Arc::new(registry),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚤 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Wire up tracing. Production gets JSON lines, development gets text.
fn init_logging(config: &config::Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vesselwatch=debug,tower_http=debug".into());

    if config.is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<VesselRegistry>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    // REST endpoints
    let api_routes = Router::new()
        .route("/api/status", get(handlers::status::status))
        .route(
            "/api/upload-sensor-data",
            post(handlers::upload::upload_sensor_data),
        );

    // Realtime telemetry stream
    let stream_routes = Router::new().route("/ws", get(handlers::stream::telemetry_stream));

    // Combine all routes
    Router::new()
        .merge(api_routes)
        .merge(stream_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            registry: Arc::new(VesselRegistry::new()),
            config: config::Config {
                port: 0,
                tick_interval_ms: 10,
                simulator_seed: None,
                environment: "test".to_string(),
            },
        }
    }

    #[test]
    fn status_route_responds() {
        tokio_test::block_on(async {
            let app = create_router(test_state());
            let response = app
                .oneshot(Request::get("/api/status").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        });
    }

    #[test]
    fn upload_without_a_file_is_rejected() {
        tokio_test::block_on(async {
            let app = create_router(test_state());
            let response = app
                .oneshot(
                    Request::post("/api/upload-sensor-data")
                        .header("content-type", "multipart/form-data; boundary=empty")
                        .body(Body::from("--empty--\r\n"))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        });
    }

    #[test]
    fn unknown_route_is_not_found() {
        tokio_test::block_on(async {
            let app = create_router(test_state());
            let response = app
                .oneshot(Request::get("/api/missing").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        });
    }
}
